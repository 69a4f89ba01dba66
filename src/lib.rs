//! svcflow: convención de ejecución para service objects.
//!
//! Este crate es la fachada pública:
//! - Re-exporta el motor de `svc-core` (contexto, validadores, handlers,
//!   atributos y `Execution`).
//! - Expone `config` con la configuración por defecto del proceso.
//! - Expone `call`, el punto de entrada a nivel de "clase".
//!
//! ```ignore
//! let out = svcflow_rust::call(MyService::default(), json!({"a": 1}), Args::new(), |m| {
//!     m.success(|result| result);
//!     m.failure(|errors| errors.to_value());
//! })?;
//! ```

pub mod config;

pub use svc_core::*;

use serde_json::Value;

/// Construye una `Execution` con la configuración global y la ejecuta.
pub fn call<S, F, R>(service: S, payload: Value, args: Args, configure: F) -> Result<Value, ServiceError>
    where S: Service,
          F: FnOnce(&mut ServiceContext) -> R,
          R: ScopeExit
{
    call_with_config(service, payload, args, config::init().clone(), configure)
}

/// Igual que `call` con una `ContextConfig` explícita.
pub fn call_with_config<S, F, R>(service: S,
                                 payload: Value,
                                 args: Args,
                                 config: ContextConfig,
                                 configure: F)
                                 -> Result<Value, ServiceError>
    where S: Service,
          F: FnOnce(&mut ServiceContext) -> R,
          R: ScopeExit
{
    Execution::with_config(service, payload, args, config).execute(configure)
}
