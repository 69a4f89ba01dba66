//! `Execution`: un objeto de ejecución por llamada.

use serde_json::Value;
use uuid::Uuid;

use super::service::Service;
use super::state::ExecutionState;
use crate::config::ContextConfig;
use crate::context::{ContextBuilder, ServiceContext};
use crate::errors::{Flow, Interrupt, ServiceError};
use crate::model::Args;

/// Valor devuelto por el callback de configuración: `()` o un `Flow` (para
/// poder usar validadores coercitivos dentro del callback).
pub trait ScopeExit {
    fn into_flow(self) -> Flow;
}

impl ScopeExit for () {
    fn into_flow(self) -> Flow {
        Ok(())
    }
}

impl ScopeExit for Flow {
    fn into_flow(self) -> Flow {
        self
    }
}

/// Objeto de ejecución: posee el servicio y su `ServiceContext`. Sirve
/// exactamente una llamada; un segundo `execute` devuelve
/// `ServiceError::AlreadyExecuted`.
#[derive(Debug)]
pub struct Execution<S> {
    service: S,
    ctx: ServiceContext,
    state: ExecutionState,
}

impl<S: Service> Execution<S> {
    pub fn new(service: S, payload: Value, args: Args) -> Self {
        Self::from_context(service, ServiceContext::new(payload, args))
    }

    pub fn with_config(service: S, payload: Value, args: Args, config: ContextConfig) -> Self {
        let ctx = ContextBuilder::new(payload).with_config(config).args(args).build();
        Self::from_context(service, ctx)
    }

    pub fn from_context(service: S, ctx: ServiceContext) -> Self {
        Self { service,
               ctx,
               state: ExecutionState::Built }
    }

    pub fn id(&self) -> Uuid {
        self.ctx.id()
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn into_parts(self) -> (S, ServiceContext) {
        (self.service, self.ctx)
    }

    /// Ejecuta sin callback de configuración.
    pub fn run(&mut self) -> Result<Value, ServiceError> {
        self.execute(|_| ())
    }

    /// configure → audit → call (si válido) dentro de un único scope; el
    /// `Halt` de un validador coercitivo termina el scope y se resuelve el
    /// resultado igualmente. `Throw` y `Fault` llegan al caller como error.
    pub fn execute<F, R>(&mut self, configure: F) -> Result<Value, ServiceError>
        where F: FnOnce(&mut ServiceContext) -> R,
              R: ScopeExit
    {
        if self.state != ExecutionState::Built {
            return Err(ServiceError::AlreadyExecuted);
        }
        self.transition(ExecutionState::Running);
        log::debug!("execute:start id={} service={}", self.ctx.id, std::any::type_name::<S>());

        match self.run_scope(configure) {
            Ok(()) => {}
            Err(Interrupt::Halt) => {
                log::debug!("execute:halt id={} state={:?}", self.ctx.id, self.state);
            }
            Err(Interrupt::Throw(label)) => {
                log::debug!("execute:throw id={} label={label} state={:?}", self.ctx.id, self.state);
                return Err(ServiceError::UncaughtThrow(label));
            }
            Err(Interrupt::Fault(e)) => {
                log::debug!("execute:fault id={} err={e} state={:?}", self.ctx.id, self.state);
                return Err(e);
            }
        }

        let result = self.ctx.resolve();
        self.transition(ExecutionState::Resolved);
        log::debug!("execute:done id={} valid={}", self.ctx.id, self.ctx.valid());
        Ok(result)
    }

    fn run_scope<F, R>(&mut self, configure: F) -> Flow
        where F: FnOnce(&mut ServiceContext) -> R,
              R: ScopeExit
    {
        configure(&mut self.ctx).into_flow()?;
        self.transition(ExecutionState::Configured);

        self.service.audit(&mut self.ctx)?;
        self.transition(ExecutionState::Audited);

        if self.ctx.valid() {
            self.transition(ExecutionState::Called);
            self.service.call(&mut self.ctx)
        } else {
            self.transition(ExecutionState::SkippedInvalid);
            Ok(())
        }
    }

    fn transition(&mut self, next: ExecutionState) {
        log::trace!("execute:transition id={} {:?} -> {:?}", self.ctx.id, self.state, next);
        self.state = next;
    }
}
