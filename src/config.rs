//! Configuración central del crate.
//! Expone una estructura inmutable (`CONFIG`) evaluada una sola vez por
//! proceso y usada por el punto de entrada `call`. No lee variables de
//! entorno: quien necesite otra clave reservada construye su propia
//! `ContextConfig` y usa `call_with_config`.
use once_cell::sync::Lazy;
use svc_core::ContextConfig;

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<ContextConfig> = Lazy::new(|| {
    let cfg = ContextConfig::default();
    log::debug!("config:init reserved_key={}", cfg.reserved_key);
    cfg
});

/// Forzar la inicialización temprana si se desea.
pub fn init() -> &'static ContextConfig {
    Lazy::force(&CONFIG)
}
