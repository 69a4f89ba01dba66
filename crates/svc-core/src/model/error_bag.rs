//! `ErrorBag`: errores de validación por campo.
//!
//! Invariantes:
//! - El orden de inserción se conserva por campo y entre campos.
//! - Se permiten duplicados.
//! - Acceder a un campo desconocido crea su lista vacía (y con ello el bag
//!   deja de estar vacío).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conversión a una lista de códigos de error. Una secuencia aporta cada
/// elemento por separado; un escalar aporta un único código.
pub trait IntoCodes {
    fn into_codes(self) -> Vec<String>;
}

impl IntoCodes for &str {
    fn into_codes(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoCodes for String {
    fn into_codes(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoCodes for &String {
    fn into_codes(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: Into<String>> IntoCodes for Vec<T> {
    fn into_codes(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>, const N: usize> IntoCodes for [T; N] {
    fn into_codes(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl IntoCodes for &[&str] {
    fn into_codes(self) -> Vec<String> {
        self.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag(IndexMap<String, Vec<String>>);

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Lista de códigos del campo, creándola vacía si no existía.
    pub fn entry(&mut self, field: &str) -> &mut Vec<String> {
        self.0.entry(field.to_string()).or_default()
    }

    pub fn push(&mut self, field: &str, codes: impl IntoCodes) {
        self.entry(field).extend(codes.into_codes());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Todos los códigos aplanados: campo por campo, en orden de inserción.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.values().flat_map(|codes| codes.iter().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0
                          .iter()
                          .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                          .collect())
    }
}

impl<F: Into<String>, C: IntoCodes> FromIterator<(F, C)> for ErrorBag {
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        let mut bag = ErrorBag::new();
        for (field, codes) in iter {
            let field = field.into();
            bag.push(&field, codes);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_value_keeps_field_insertion_order() {
        let mut bag = ErrorBag::new();
        bag.push("b", "x");
        bag.push("a", "y");
        let value = bag.to_value();
        let keys: Vec<&str> = value.as_object().expect("object").keys().map(String::as_str).collect();
        assert_eq!(keys, bag.fields().collect::<Vec<_>>());
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn push_preserves_call_order() {
        let mut bag = ErrorBag::new();
        bag.push("f", "v1");
        bag.push("f", "v2");
        assert_eq!(bag.get("f"), Some(&["v1".to_string(), "v2".to_string()][..]));
    }

    #[test]
    fn sequence_value_is_appended_element_wise() {
        let mut bag = ErrorBag::new();
        bag.push("a", "force");
        bag.push("a", ["exit", "exit"]);
        assert_eq!(bag.get("a").map(|c| c.len()), Some(3));
    }

    #[test]
    fn entry_creates_empty_list_and_makes_bag_non_empty() {
        let mut bag = ErrorBag::new();
        assert!(bag.entry("x").is_empty());
        assert!(!bag.is_empty());
    }

    #[test]
    fn codes_flatten_field_then_append_order() {
        let bag: ErrorBag = vec![("a", vec!["1", "2"]), ("b", vec!["3"])].into_iter().collect();
        assert_eq!(bag.codes().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(bag.to_value(), json!({"a": ["1", "2"], "b": ["3"]}));
    }
}
