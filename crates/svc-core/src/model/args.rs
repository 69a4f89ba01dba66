//! Argumentos auxiliares con nombre que acompañan al payload primario.

use serde_json::Value;

use super::key::Key;

/// Lista ordenada de argumentos tal y como los entrega el caller. Las claves
/// se canonicalizan más tarde, al construir el contexto.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<(Key, Value)>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn push(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Expande un objeto JSON en argumentos (claves en forma `Symbol`). Un
    /// valor que no sea objeto no aporta argumentos.
    pub fn json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map.into_iter().map(|(k, v)| (Key::Symbol(k), v)).collect()),
            other => {
                log::debug!("args:json ignoring non-object value kind={}", value_kind(&other));
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_entries(self) -> Vec<(Key, Value)> {
        self.0
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_keeps_object_key_order() {
        let args = Args::json(json!({"y": 1, "x": 2}));
        let keys: Vec<String> = args.into_entries().into_iter().map(|(k, _)| k.into_name()).collect();
        assert_eq!(keys, vec!["y", "x"]);
    }

    #[test]
    fn json_ignores_non_objects() {
        assert!(Args::json(json!([1, 2])).is_empty());
    }
}
