use indexmap::IndexMap;
use serde_json::Value;

/// Valores producidos por la llamada, uno por clave, en orden de escritura.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputBag(IndexMap<String, Value>);

impl OutputBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escribe (o sobreescribe, conservando la posición original) la clave.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
