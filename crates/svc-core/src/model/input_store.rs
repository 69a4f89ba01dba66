//! `InputStore`: payload primario bajo la clave reservada + argumentos
//! auxiliares, todos con claves ya canonicalizadas.

use indexmap::IndexMap;
use serde_json::Value;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq)]
pub struct InputStore {
    reserved_key: String,
    entries: IndexMap<String, Value>,
}

impl InputStore {
    /// Construye el store: `args` extendido con `{reserved_key: payload}`.
    /// Un argumento auxiliar que coincida con la clave reservada queda
    /// reemplazado por el payload.
    pub fn new(reserved_key: impl Into<String>, payload: Value, args: IndexMap<String, Value>) -> Self {
        let reserved_key = reserved_key.into();
        let mut entries = args;
        entries.insert(reserved_key.clone(), payload);
        Self { reserved_key, entries }
    }

    pub fn reserved_key(&self) -> &str {
        &self.reserved_key
    }

    pub fn payload(&self) -> &Value {
        // la clave reservada se inserta en `new` y nunca se elimina
        self.entries.get(&self.reserved_key).unwrap_or(&NULL)
    }

    pub fn set_payload(&mut self, value: Value) {
        self.entries.insert(self.reserved_key.clone(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Argumentos auxiliares (todas las entradas salvo la reservada).
    pub fn args(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter(|(k, _)| **k != self.reserved_key)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn args_is_empty(&self) -> bool {
        self.args().next().is_none()
    }

    pub fn has_arg(&self, key: &str) -> bool {
        key != self.reserved_key && self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copia inmutable del `InputStore` tomada justo tras la construcción.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(InputStore);

impl Snapshot {
    pub fn of(store: &InputStore) -> Self {
        Self(store.clone())
    }

    pub fn payload(&self) -> &Value {
        self.0.payload()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn store(&self) -> &InputStore {
        &self.0
    }
}
