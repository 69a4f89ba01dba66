//! Acceso a entradas del contexto como pseudo-campos.
//!
//! Búsqueda de `name` en tres ramas:
//! 1. Sin argumentos auxiliares y con payload objeto: la entrada del payload.
//! 2. Si no, la entrada del `InputStore` completo (clave reservada incluida).
//! 3. Si no, `ServiceError::NoSuchAttribute`.
//!
//! Las claves ya están canonicalizadas desde `ContextBuilder`, por lo que no
//! hace falta doble búsqueda string/symbol.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::context::ServiceContext;
use crate::errors::ServiceError;

impl ServiceContext {
    /// Rama 1.
    pub fn try_get_from_payload(&self, name: &str) -> Option<&Value> {
        if !self.inputs.args_is_empty() {
            return None;
        }
        self.input().as_object()?.get(name)
    }

    /// Rama 2.
    pub fn try_get_from_inputs(&self, name: &str) -> Option<&Value> {
        self.inputs.get(name)
    }

    pub fn attr(&self, name: &str) -> Result<&Value, ServiceError> {
        self.try_get_from_payload(name)
            .or_else(|| self.try_get_from_inputs(name))
            .ok_or_else(|| ServiceError::NoSuchAttribute(name.to_string()))
    }

    /// `attr` decodificado a `T`.
    pub fn attr_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ServiceError> {
        let value = self.attr(name)?;
        serde_json::from_value(value.clone()).map_err(|e| ServiceError::AttributeDecode { name: name.to_string(),
                                                                                          message: e.to_string() })
    }

    /// Misma prueba que `attr`, sin error.
    pub fn responds_to(&self, name: &str) -> bool {
        self.try_get_from_payload(name).is_some() || self.try_get_from_inputs(name).is_some()
    }
}

/// Declara un struct de atributos tipados leídos del contexto.
///
/// ```ignore
/// service_attrs!(pub struct SumAttrs { x: i64, y: i64 });
/// let attrs = SumAttrs::from_context(ctx)?;
/// ```
#[macro_export]
macro_rules! service_attrs {
    ($vis:vis struct $name:ident { $($fvis:vis $field:ident : $fty:ty),+ $(,)? }) => {
        #[derive(Debug, Clone)]
        $vis struct $name { $($fvis $field: $fty,)+ }

        impl $name {
            pub fn from_context(ctx: &$crate::ServiceContext) -> Result<Self, $crate::ServiceError> {
                Ok(Self { $($field: ctx.attr_as::<$fty>(stringify!($field))?,)+ })
            }
        }

        impl TryFrom<&$crate::ServiceContext> for $name {
            type Error = $crate::ServiceError;

            fn try_from(ctx: &$crate::ServiceContext) -> Result<Self, Self::Error> {
                Self::from_context(ctx)
            }
        }
    };
}
