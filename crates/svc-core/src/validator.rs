//! Validadores del contexto.
//!
//! Variantes simples: registran errores en el `ErrorBag` y continúan.
//! Variantes coercitivas (`*_or_exit`): ejecutan la simple y devuelven
//! `Err(Interrupt::Halt)` si el contexto quedó inválido, para que el caller
//! salga del scope con `?`.
//!
//! Los validadores orientados a mapas exigen primero que el payload sea un
//! objeto; si no lo es registran un único error de forma y no hacen nada
//! más.

use serde_json::Value;

use crate::constants::{ANY_FIELD_MUST_EXIST, FIELD_MUST_EXIST, INPUT_FIELD, INPUT_SUBITEM_FIELD, MUST_BE_ARRAY, MUST_BE_HASH};
use crate::context::ServiceContext;
use crate::errors::{Flow, Interrupt};
use crate::model::{merge_object, slice_object, IntoCodes};

macro_rules! coercive {
    ($($(#[$meta:meta])* $name:ident => $plain:ident($($arg:ident : $ty:ty),*);)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, $($arg: $ty),*) -> Flow {
                self.$plain($($arg),*);
                self.halt_unless_valid()
            }
        )+
    };
}

impl ServiceContext {
    /// Añade `codes` (elemento a elemento si es una secuencia) a `field`.
    pub fn add_error(&mut self, field: &str, codes: impl IntoCodes) {
        let codes = codes.into_codes();
        log::trace!("validator:add_error id={} field={field} codes={codes:?}", self.id);
        self.errors.push(field, codes);
    }

    /// `add_error` para cada entrada de `errors`.
    pub fn add_errors(&mut self, errors: impl IntoIterator<Item = (impl AsRef<str>, impl IntoCodes)>) {
        for (field, codes) in errors {
            self.add_error(field.as_ref(), codes);
        }
    }

    /// Registra `field_must_exist` por cada clave ausente de la unión
    /// {claves del payload, claves auxiliares}.
    pub fn required(&mut self, keys: &[&str]) {
        if !self.input().is_object() {
            return self.add_error(INPUT_FIELD, MUST_BE_HASH);
        }
        let missing: Vec<&str> = keys.iter().copied().filter(|k| !self.has_service_key(k)).collect();
        for key in missing {
            self.add_error(key, FIELD_MUST_EXIST);
        }
    }

    /// Registra `input: any_field_must_exist` salvo que alguna clave exista.
    pub fn any(&mut self, keys: &[&str]) {
        if !self.input().is_object() {
            return self.add_error(INPUT_FIELD, MUST_BE_HASH);
        }
        if !keys.iter().any(|k| self.has_service_key(k)) {
            self.add_error(INPUT_FIELD, ANY_FIELD_MUST_EXIST);
        }
    }

    /// Reemplaza el payload por `(payload ⊕ args)` recortado a `keys`; los
    /// argumentos auxiliares ganan en colisión.
    pub fn sliced(&mut self, keys: &[&str]) {
        let sliced = match self.input().as_object() {
            Some(input) => slice_object(&merge_object(input, self.inputs.args()), keys),
            None => return self.add_error(INPUT_FIELD, MUST_BE_HASH),
        };
        self.set_input(Value::Object(sliced));
    }

    /// El payload debe ser una lista de objetos; cada uno se recorta a `keys`.
    /// Si la forma no es válida el payload queda intacto.
    pub fn sliced_list(&mut self, keys: &[&str]) {
        let sliced = match self.input() {
            Value::Array(items) => {
                let objects: Option<Vec<_>> = items.iter().map(Value::as_object).collect();
                match objects {
                    Some(objects) => objects.into_iter()
                                            .map(|item| Value::Object(slice_object(item, keys)))
                                            .collect::<Vec<_>>(),
                    None => return self.add_error(INPUT_SUBITEM_FIELD, MUST_BE_HASH),
                }
            }
            _ => return self.add_error(INPUT_FIELD, MUST_BE_ARRAY),
        };
        self.set_input(Value::Array(sliced));
    }

    /// `true` si `key` es clave del payload (objeto) o argumento auxiliar.
    pub fn has_service_key(&self, key: &str) -> bool {
        self.input().as_object().is_some_and(|m| m.contains_key(key)) || self.inputs.has_arg(key)
    }

    /// Salida del scope si el contexto es inválido.
    pub fn halt_unless_valid(&self) -> Flow {
        if self.valid() {
            Ok(())
        } else {
            log::debug!("validator:halt id={} error_fields={}", self.id, self.errors.len());
            Err(Interrupt::Halt)
        }
    }

    /// Señal de abort con etiqueta propia; el scope del executor no la
    /// intercepta.
    pub fn throw(&self, label: impl Into<String>) -> Interrupt {
        Interrupt::Throw(label.into())
    }

    coercive! {
        add_error_or_exit => add_error(field: &str, codes: impl IntoCodes);
        add_errors_or_exit => add_errors(errors: impl IntoIterator<Item = (impl AsRef<str>, impl IntoCodes)>);
        required_or_exit => required(keys: &[&str]);
        any_or_exit => any(keys: &[&str]);
        sliced_or_exit => sliced(keys: &[&str]);
        sliced_list_or_exit => sliced_list(keys: &[&str]);
    }
}
