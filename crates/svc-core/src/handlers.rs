//! Registro de hooks / success / failure y resolución del resultado final.
//!
//! Reglas de selección:
//! - success: primer valor de `[claves del OutputBag en orden de inserción,
//!   None]` que exista como selector registrado. El valor resultante es
//!   `outputs[selector]` si el selector es una clave de output; si no,
//!   `outputs[clave reservada]`.
//! - failure: primer valor de `[códigos del ErrorBag aplanados, None]` que
//!   exista como selector registrado. Sin coincidencia (ni default) los
//!   errores se descartan y el resultado es `Value::Null`.
//!
//! Registrar dos veces el mismo nombre/selector sobreescribe el anterior.

use std::collections::HashMap;
use std::fmt;
use std::iter;

use indexmap::IndexMap;
use serde_json::Value;

use crate::context::ServiceContext;
use crate::model::ErrorBag;

/// Argumento entregado a un hook.
#[derive(Debug)]
pub enum HookArg<'a> {
    /// `hook(name)`: el propio contexto de ejecución.
    Context(&'a ServiceContext),
    /// `hook_with(name, data)`: dato explícito.
    Data(Value),
}

impl HookArg<'_> {
    pub fn data(&self) -> Option<&Value> {
        match self {
            HookArg::Data(v) => Some(v),
            HookArg::Context(_) => None,
        }
    }

    pub fn context(&self) -> Option<&ServiceContext> {
        match self {
            HookArg::Context(ctx) => Some(ctx),
            HookArg::Data(_) => None,
        }
    }
}

pub type HookFn = Box<dyn Fn(HookArg<'_>) -> Value>;
pub type SuccessFn = Box<dyn Fn(Value) -> Value>;
pub type FailureFn = Box<dyn Fn(&ErrorBag) -> Value>;

/// `None` es el selector por defecto.
pub type Selector = Option<String>;

#[derive(Default)]
pub struct HandlerTable {
    hooks: HashMap<String, HookFn>,
    success: IndexMap<Selector, SuccessFn>,
    failure: IndexMap<Selector, FailureFn>,
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
         .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
         .field("success", &self.success.keys().collect::<Vec<_>>())
         .field("failure", &self.failure.keys().collect::<Vec<_>>())
         .finish()
    }
}

impl HandlerTable {
    pub fn has_hook(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    pub fn has_success(&self, selector: Option<&str>) -> bool {
        self.success.contains_key(&selector.map(str::to_string))
    }

    pub fn has_failure(&self, selector: Option<&str>) -> bool {
        self.failure.contains_key(&selector.map(str::to_string))
    }

    /// Selector de éxito elegido para `outputs`, si alguno coincide.
    fn success_selector<'a>(&self, output_keys: impl Iterator<Item = &'a str>) -> Option<Option<&'a str>> {
        output_keys.map(Some)
                   .chain(iter::once(None))
                   .find(|sel| self.has_success(*sel))
    }

    fn failure_selector<'a>(&self, errors: &'a ErrorBag) -> Option<Option<&'a str>> {
        errors.codes()
              .map(Some)
              .chain(iter::once(None))
              .find(|sel| self.has_failure(*sel))
    }
}

impl ServiceContext {
    /// Registra el hook `name`.
    pub fn on<F, R>(&mut self, name: impl Into<String>, hook: F)
        where F: Fn(HookArg<'_>) -> R + 'static,
              R: Into<Value>
    {
        self.handlers.hooks.insert(name.into(), Box::new(move |arg: HookArg<'_>| -> Value { hook(arg).into() }));
    }

    /// Registra el handler de éxito por defecto.
    pub fn success<F, R>(&mut self, handler: F)
        where F: Fn(Value) -> R + 'static,
              R: Into<Value>
    {
        self.register_success(None, handler);
    }

    /// Registra un handler de éxito para la clave de output `selector`.
    pub fn success_on<F, R>(&mut self, selector: impl Into<String>, handler: F)
        where F: Fn(Value) -> R + 'static,
              R: Into<Value>
    {
        self.register_success(Some(selector.into()), handler);
    }

    /// Registra el handler de fallo por defecto.
    pub fn failure<F, R>(&mut self, handler: F)
        where F: Fn(&ErrorBag) -> R + 'static,
              R: Into<Value>
    {
        self.register_failure(None, handler);
    }

    /// Registra un handler de fallo para el código de error `selector`.
    pub fn failure_on<F, R>(&mut self, selector: impl Into<String>, handler: F)
        where F: Fn(&ErrorBag) -> R + 'static,
              R: Into<Value>
    {
        self.register_failure(Some(selector.into()), handler);
    }

    fn register_success<F, R>(&mut self, selector: Selector, handler: F)
        where F: Fn(Value) -> R + 'static,
              R: Into<Value>
    {
        self.handlers.success.insert(selector, Box::new(move |v: Value| -> Value { handler(v).into() }));
    }

    fn register_failure<F, R>(&mut self, selector: Selector, handler: F)
        where F: Fn(&ErrorBag) -> R + 'static,
              R: Into<Value>
    {
        self.handlers.failure.insert(selector, Box::new(move |e: &ErrorBag| -> Value { handler(e).into() }));
    }

    /// Invoca el hook `name` con el propio contexto. `None` si no existe.
    pub fn hook(&self, name: &str) -> Option<Value> {
        let hook = self.handlers.hooks.get(name)?;
        log::trace!("hook id={} name={name} arg=context", self.id);
        Some(hook(HookArg::Context(self)))
    }

    /// Invoca el hook `name` con `data`. `None` si no existe.
    pub fn hook_with(&self, name: &str, data: impl Into<Value>) -> Option<Value> {
        let hook = self.handlers.hooks.get(name)?;
        log::trace!("hook id={} name={name} arg=data", self.id);
        Some(hook(HookArg::Data(data.into())))
    }

    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// Resuelve el valor final según el estado de validez actual.
    pub fn resolve(&self) -> Value {
        if self.valid() {
            self.resolve_success()
        } else {
            self.resolve_failure()
        }
    }

    fn resolve_success(&self) -> Value {
        let selector = self.handlers.success_selector(self.outputs.keys());
        let result = match selector {
            Some(Some(key)) => self.outputs.get(key),
            _ => self.default_output(),
        }.cloned()
         .unwrap_or(Value::Null);

        let handler = selector.and_then(|sel| self.handlers.success.get(&sel.map(str::to_string)));
        log::debug!("resolve:success id={} selector={:?} handler={}",
                    self.id,
                    selector.flatten(),
                    handler.is_some());
        match handler {
            Some(handler) => handler(result),
            None => result,
        }
    }

    fn resolve_failure(&self) -> Value {
        match self.handlers.failure_selector(&self.errors) {
            Some(sel) => {
                log::debug!("resolve:failure id={} selector={:?}", self.id, sel);
                match self.handlers.failure.get(&sel.map(str::to_string)) {
                    Some(handler) => handler(&self.errors),
                    None => Value::Null,
                }
            }
            None => {
                log::warn!("resolve:failure id={} no failure handler matched, dropping {} error field(s)",
                           self.id,
                           self.errors.len());
                Value::Null
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Args;
    use crate::ServiceContext;
    use serde_json::{json, Value};

    fn ctx() -> ServiceContext {
        ServiceContext::new(json!({}), Args::new())
    }

    #[test]
    fn success_without_handlers_returns_default_output() {
        let mut c = ctx();
        c.output(42);
        assert_eq!(c.resolve(), json!(42));
    }

    #[test]
    fn success_prefers_handler_registered_for_output_key() {
        let mut c = ctx();
        c.output(1);
        c.output_at("special", 2);
        c.success(|v| json!({"default": v}));
        c.success_on("special", |v| json!({"special": v}));
        assert_eq!(c.resolve(), json!({"special": 2}));
    }

    #[test]
    fn success_output_key_order_decides_selector() {
        let mut c = ctx();
        c.output_at("first", 1);
        c.output_at("second", 2);
        c.success_on("second", |v| v);
        c.success_on("first", |v| json!(["first", v]));
        assert_eq!(c.resolve(), json!(["first", 1]));
    }

    #[test]
    fn success_unmatched_output_key_falls_back_to_default_value() {
        let mut c = ctx();
        c.output(7);
        c.output_at("other", 8);
        c.success(|v| v);
        assert_eq!(c.resolve(), json!(7));
    }

    #[test]
    fn failure_picks_first_matching_code() {
        let mut c = ctx();
        c.add_error("err_key", "other_param");
        c.add_error("err_key", "err_val");
        c.failure_on("err_val", |e| e.to_value());
        c.failure_on("other_param", |_| "Other param failure");
        c.failure(|_| "Default failure");
        assert_eq!(c.resolve(), json!("Other param failure"));
    }

    #[test]
    fn failure_without_handler_is_dropped() {
        let mut c = ctx();
        c.add_error("a", "x");
        assert_eq!(c.resolve(), Value::Null);
    }

    #[test]
    fn re_registration_overwrites() {
        let mut c = ctx();
        c.failure(|_| 1);
        c.failure(|_| 2);
        c.add_error("a", "x");
        assert_eq!(c.resolve(), json!(2));
    }

    #[test]
    fn hook_passes_data_or_context() {
        let mut c = ctx();
        c.on("data", |arg| arg.data().cloned().unwrap_or(Value::Null));
        c.on("ctx", |arg| arg.context().map(|ctx| ctx.valid()).unwrap_or(false));
        assert_eq!(c.hook_with("data", 42), Some(json!(42)));
        assert_eq!(c.hook("ctx"), Some(json!(true)));
        assert_eq!(c.hook("missing"), None);
    }
}
