//! Configuración del contexto de ejecución.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CTX_KEY;

/// Parámetros con los que se construye cada `ServiceContext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Clave reservada del payload primario (y clave de output por defecto).
    pub reserved_key: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { reserved_key: DEFAULT_CTX_KEY.to_string() }
    }
}

impl ContextConfig {
    pub fn with_reserved_key(key: impl Into<String>) -> Self {
        Self { reserved_key: key.into() }
    }
}
