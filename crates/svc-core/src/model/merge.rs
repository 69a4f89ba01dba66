//! Utilidades de merge y recorte sobre objetos JSON.
//!
//! Merge "shallow": las claves de `b` reemplazan a las de `a`. El recorte
//! (`slice_object`) conserva exactamente las claves pedidas, en el orden en
//! que se piden; las ausentes simplemente se omiten.

use serde_json::{Map, Value};

/// Merge shallow: keys from `b` override keys from `a`.
pub fn merge_object<'a, I>(a: &Map<String, Value>, b: I) -> Map<String, Value>
    where I: IntoIterator<Item = (&'a str, &'a Value)>
{
    let mut out = a.clone();
    for (k, v) in b {
        out.insert(k.to_string(), v.clone());
    }
    out
}

pub fn slice_object(source: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for key in keys {
        if let Some(v) = source.get(*key) {
            out.insert(key.to_string(), v.clone());
        }
    }
    out
}
