//! Contexto de ejecución de un servicio.
//!
//! `ServiceContext` es el valor que recibe el código de negocio: posee el
//! `InputStore`, su `Snapshot`, el `ErrorBag`, el `OutputBag` y la tabla de
//! handlers. Se crea fresco por llamada (vía `ContextBuilder`) y nunca se
//! comparte entre llamadas.
//!
//! Los validadores (`validator`), la resolución de atributos (`attributes`)
//! y el registro/resolución de handlers (`handlers`) se implementan en sus
//! propios módulos como bloques `impl ServiceContext`.

use serde_json::Value;
use uuid::Uuid;

use crate::config::ContextConfig;
use crate::handlers::HandlerTable;
use crate::model::{canonicalize, Args, ErrorBag, InputStore, OutputBag, Snapshot};

/// Ensambla el `InputStore` de una llamada a partir del payload primario y
/// los argumentos auxiliares.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    config: ContextConfig,
    payload: Value,
    args: Args,
}

impl ContextBuilder {
    pub fn new(payload: Value) -> Self {
        Self { config: ContextConfig::default(),
               payload,
               args: Args::new() }
    }

    pub fn with_config(mut self, config: ContextConfig) -> Self {
        self.config = config;
        self
    }

    pub fn args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn arg(mut self, key: impl Into<crate::model::Key>, value: impl Into<Value>) -> Self {
        self.args.push(key, value);
        self
    }

    /// Canonicaliza las claves auxiliares, inserta el payload bajo la clave
    /// reservada y congela el snapshot.
    pub fn build(self) -> ServiceContext {
        let args = canonicalize(self.args.into_entries());
        let inputs = InputStore::new(self.config.reserved_key, self.payload, args);
        let snapshot = Snapshot::of(&inputs);
        let id = Uuid::new_v4();
        log::trace!("context:build id={id} inputs={}", inputs.len());
        ServiceContext { id,
                         inputs,
                         snapshot,
                         errors: ErrorBag::new(),
                         outputs: OutputBag::new(),
                         handlers: HandlerTable::default() }
    }
}

/// Estado por llamada. Ver módulo.
#[derive(Debug)]
pub struct ServiceContext {
    pub(crate) id: Uuid,
    pub(crate) inputs: InputStore,
    pub(crate) snapshot: Snapshot,
    pub(crate) errors: ErrorBag,
    pub(crate) outputs: OutputBag,
    pub(crate) handlers: HandlerTable,
}

impl ServiceContext {
    pub fn new(payload: Value, args: Args) -> Self {
        ContextBuilder::new(payload).args(args).build()
    }

    /// Identificador de la ejecución (sólo para correlación en logs).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// `true` si el `ErrorBag` está vacío. Se evalúa siempre, nunca se cachea.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    pub fn outputs(&self) -> &OutputBag {
        &self.outputs
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    pub fn inputs_snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Payload primario actual.
    pub fn input(&self) -> &Value {
        self.inputs.payload()
    }

    /// Reasigna explícitamente el payload primario.
    pub fn set_input(&mut self, value: Value) {
        self.inputs.set_payload(value);
    }

    /// Payload primario tal y como llegó.
    pub fn input_snapshot(&self) -> &Value {
        self.snapshot.payload()
    }

    pub fn args(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inputs.args()
    }

    pub fn reserved_key(&self) -> &str {
        self.inputs.reserved_key()
    }

    /// Escribe en la clave por defecto del `OutputBag` y devuelve el valor.
    pub fn output(&mut self, value: impl Into<Value>) -> Value {
        let key = self.inputs.reserved_key().to_string();
        self.output_at(key, value)
    }

    pub fn output_at(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Value {
        let value = value.into();
        self.outputs.insert(key, value.clone());
        value
    }

    pub fn output_value(&self, key: &str) -> Option<&Value> {
        self.outputs.get(key)
    }

    pub fn default_output(&self) -> Option<&Value> {
        self.outputs.get(self.inputs.reserved_key())
    }
}
