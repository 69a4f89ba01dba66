//! Claves de entrada y su canonicalización.
//!
//! Un caller puede entregar la misma clave lógica en dos representaciones
//! (`Symbol` y `Text`). El contexto sólo almacena `String`: la fusión se
//! resuelve aquí, una única vez, al construir el contexto. Regla de merge:
//! las entradas se aplican en orden, pero una entrada `Text` nunca pisa una
//! `Symbol` ya almacenada, mientras que una `Symbol` siempre pisa a una
//! `Text`. Entre dos entradas de la misma forma gana la última.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Clave tal y como llega del caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Symbol(String),
    Text(String),
}

impl Key {
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Symbol(n) | Key::Text(n) => n,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    pub fn into_name(self) -> String {
        match self {
            Key::Symbol(n) | Key::Text(n) => n,
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Symbol(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Symbol(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Symbol(value.clone())
    }
}

/// Fusiona entradas con claves heterogéneas en un mapa canónico.
pub fn canonicalize<I, K>(entries: I) -> IndexMap<String, Value>
    where I: IntoIterator<Item = (K, Value)>,
          K: Into<Key>
{
    let mut merged: IndexMap<String, (bool, Value)> = IndexMap::new();
    for (key, value) in entries {
        let key = key.into();
        let symbol = key.is_symbol();
        match merged.get_mut(key.name()) {
            Some((stored_symbol, _)) if *stored_symbol && !symbol => {}
            Some(slot) => *slot = (symbol, value),
            None => {
                merged.insert(key.into_name(), (symbol, value));
            }
        }
    }
    merged.into_iter().map(|(k, (_, v))| (k, v)).collect()
}

/// Igual que `canonicalize` pero produce un `Value::Object`, útil para
/// construir payloads primarios con claves mixtas.
pub fn canonicalize_value<I, K>(entries: I) -> Value
    where I: IntoIterator<Item = (K, Value)>,
          K: Into<Key>
{
    Value::Object(canonicalize(entries).into_iter().collect::<Map<String, Value>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbol_wins_regardless_of_order() {
        let a = canonicalize(vec![(Key::text("k"), json!(1)), (Key::symbol("k"), json!(2))]);
        let b = canonicalize(vec![(Key::symbol("k"), json!(2)), (Key::text("k"), json!(1))]);
        assert_eq!(a.get("k"), Some(&json!(2)));
        assert_eq!(b.get("k"), Some(&json!(2)));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn same_form_later_entry_wins() {
        let m = canonicalize(vec![("k", json!(1)), ("k", json!(3))]);
        assert_eq!(m.get("k"), Some(&json!(3)));
    }

    #[test]
    fn text_only_key_is_kept() {
        let v = canonicalize_value(vec![(Key::text("method_name"), json!(42))]);
        assert_eq!(v, json!({"method_name": 42}));
    }
}
