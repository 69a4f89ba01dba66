//! svc-core: motor de ejecución de servicios (service objects).
//!
//! Una llamada = payload primario + argumentos auxiliares con nombre. El
//! resultado es un valor de éxito o errores de validación por campo, con
//! hooks opcionales disparados durante la ejecución.
pub mod attributes;
pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod model;
pub mod validator;

pub use config::ContextConfig;
pub use context::{ContextBuilder, ServiceContext};
pub use engine::{call, service_fn, Execution, ExecutionState, FnService, ScopeExit, Service, ServiceExt};
pub use errors::{Flow, Interrupt, ServiceError};
pub use handlers::{HandlerTable, HookArg};
pub use model::{Args, ErrorBag, Key};

// `service_attrs!` se exporta en la raíz del crate vía #[macro_export].
