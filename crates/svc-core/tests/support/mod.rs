//! Helpers compartidos por los tests de integración.
#![allow(dead_code)]

use serde_json::Value;
use svc_core::{Args, Service, ServiceError, ServiceExt};

/// Ejecuta con success/failure por defecto que devuelven resultado y errores.
pub fn call_service<S: Service>(service: S, input: Value, args: Args) -> Result<Value, ServiceError> {
    service.call_with(input, args, |m| {
               m.success(|result| result);
               m.failure(|errors| errors.to_value());
           })
}

/// Registra handlers para `error_param`, `other_param` y el default.
pub fn call_service_with_error_param<S: Service>(service: S, input: Value, error_param: &str) -> Result<Value, ServiceError> {
    let error_param = error_param.to_string();
    service.call_with(input, Args::new(), move |m| {
               m.success(|result| result);
               m.failure_on(error_param, |errors| errors.to_value());
               m.failure_on("other_param", |_| "Other param failure");
               m.failure(|_| "Default failure");
           })
}
