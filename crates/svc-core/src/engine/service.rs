//! Contrato que implementa cada servicio.

use std::fmt;

use serde_json::Value;

use super::execution::{Execution, ScopeExit};
use crate::context::ServiceContext;
use crate::errors::{Flow, ServiceError};
use crate::model::Args;

/// Unidad de lógica de negocio ejecutada por `Execution`.
///
/// `call` recibe el contexto de la llamada y usa sus validadores, atributos,
/// `output` y `hook`. Los validadores coercitivos se propagan con `?`.
pub trait Service {
    /// Lógica de negocio. Sin sobreescribir, falla con `NotImplemented`.
    fn call(&mut self, ctx: &mut ServiceContext) -> Flow {
        let _ = ctx;
        Err(ServiceError::NotImplemented.into())
    }

    /// Validación previa a `call` (no-op por defecto).
    fn audit(&mut self, ctx: &mut ServiceContext) -> Flow {
        let _ = ctx;
        Ok(())
    }
}

/// Punto de entrada a nivel de "clase": construye una `Execution` y la
/// ejecuta.
pub trait ServiceExt: Service + Sized {
    fn call_with<F, R>(self, payload: Value, args: Args, configure: F) -> Result<Value, ServiceError>
        where F: FnOnce(&mut ServiceContext) -> R,
              R: ScopeExit
    {
        Execution::new(self, payload, args).execute(configure)
    }

    /// Igual que `call_with` sobre `Self::default()`.
    fn invoke<F, R>(payload: Value, args: Args, configure: F) -> Result<Value, ServiceError>
        where Self: Default,
              F: FnOnce(&mut ServiceContext) -> R,
              R: ScopeExit
    {
        Self::default().call_with(payload, args, configure)
    }
}

impl<S: Service> ServiceExt for S {}

/// Ejecuta `service` con `payload`, `args` y el callback de configuración.
pub fn call<S, F, R>(service: S, payload: Value, args: Args, configure: F) -> Result<Value, ServiceError>
    where S: Service,
          F: FnOnce(&mut ServiceContext) -> R,
          R: ScopeExit
{
    service.call_with(payload, args, configure)
}

/// Adaptador: cualquier closure `FnMut(&mut ServiceContext) -> Flow` es un
/// `Service` (sin `audit`).
pub struct FnService<F>(F);

impl<F> fmt::Debug for FnService<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnService")
    }
}

impl<F> Service for FnService<F> where F: FnMut(&mut ServiceContext) -> Flow
{
    fn call(&mut self, ctx: &mut ServiceContext) -> Flow {
        (self.0)(ctx)
    }
}

pub fn service_fn<F>(f: F) -> FnService<F>
    where F: FnMut(&mut ServiceContext) -> Flow
{
    FnService(f)
}
