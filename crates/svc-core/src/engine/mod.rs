//! Executor: ciclo de vida de una llamada a servicio.
//!
//! `Execution` orquesta configure → audit → call dentro de un único scope de
//! abort y resuelve el resultado con la tabla de handlers del contexto.

pub mod execution;
pub mod service;
pub mod state;

pub use execution::{Execution, ScopeExit};
pub use service::{call, service_fn, FnService, Service, ServiceExt};
pub use state::ExecutionState;
