//! Constantes del motor de ejecución.
//!
//! Agrupa las claves y mensajes fijos que comparten el contexto, los
//! validadores y la resolución de resultados. Los códigos de error aquí
//! definidos forman parte del contrato observable: los callers los usan como
//! selectores de `failure`.

/// Clave reservada bajo la que vive el payload primario dentro del
/// `InputStore` y clave por defecto del `OutputBag`.
pub const DEFAULT_CTX_KEY: &str = "default";

/// Mensaje del fault emitido cuando un servicio no sobreescribe `call`.
pub const NOT_IMPLEMENTED: &str = "call method must be implemented";

/// Campo usado por los validadores para errores de forma del payload.
pub const INPUT_FIELD: &str = "input";
/// Campo usado cuando un elemento del payload lista no es un objeto.
pub const INPUT_SUBITEM_FIELD: &str = "input_subitem";

pub const MUST_BE_HASH: &str = "must_be_hash";
pub const MUST_BE_ARRAY: &str = "must_be_array";
pub const FIELD_MUST_EXIST: &str = "field_must_exist";
pub const ANY_FIELD_MUST_EXIST: &str = "any_field_must_exist";
