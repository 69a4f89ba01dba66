//! Errores del motor: faults de programación e interrupciones del scope.
//!
//! Los errores de validación NO viven aquí: se acumulan en `ErrorBag` y sólo
//! salen a través de la resolución `failure`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::NOT_IMPLEMENTED;

/// Faults de desarrollo. Se propagan sin modificar hasta el caller externo.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("{msg}", msg = NOT_IMPLEMENTED)] NotImplemented,
    #[error("undefined attribute `{0}` for service context")] NoSuchAttribute(String),
    #[error("uncaught throw :{0}")] UncaughtThrow(String),
    #[error("execution object already used")] AlreadyExecuted,
    #[error("attribute `{name}` could not be decoded: {message}")]
    AttributeDecode { name: String, message: String },
}

/// Salida anticipada del scope de ejecución.
///
/// - `Halt`: abort de un validador coercitivo; el executor lo intercepta.
/// - `Throw`: señal de abort con etiqueta propia; el scope no la reconoce y
///   llega al caller como `ServiceError::UncaughtThrow`.
/// - `Fault`: error de programación.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Interrupt {
    #[error("execution halted by coercive validation")] Halt,
    #[error("throw :{0}")] Throw(String),
    #[error(transparent)] Fault(#[from] ServiceError),
}

/// Resultado de cada tramo del scope (`configure`, `audit`, `call`).
pub type Flow<T = ()> = Result<T, Interrupt>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_message_is_fixed() {
        assert_eq!(ServiceError::NotImplemented.to_string(), "call method must be implemented");
    }

    #[test]
    fn fault_converts_into_interrupt() {
        let i: Interrupt = ServiceError::NoSuchAttribute("x".into()).into();
        assert_eq!(i, Interrupt::Fault(ServiceError::NoSuchAttribute("x".into())));
        assert_eq!(i.to_string(), "undefined attribute `x` for service context");
    }
}
