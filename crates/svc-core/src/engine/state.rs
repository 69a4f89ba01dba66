/// Estado de una `Execution`.
///
/// Las transiciones válidas son:
/// - `Built` -> `Running` (al entrar en `execute`)
/// - `Running` -> `Configured`
/// - `Configured` -> `Audited`
/// - `Audited` -> `Called` (contexto válido tras audit)
/// - `Audited` -> `SkippedInvalid` (audit dejó errores)
/// - cualquiera de los anteriores -> `Resolved` (fin del scope, normal o por
///   halt)
///
/// Un fault o un throw deja la ejecución en el último estado alcanzado, que
/// nunca es `Built`: el objeto queda consumido igualmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Contexto construido, nada ejecutado.
    Built,
    /// `execute` iniciado; el scope está en curso.
    Running,
    /// Callback de configuración ejecutado.
    Configured,
    /// `audit` ejecutado.
    Audited,
    /// `call` invocado.
    Called,
    /// `call` omitido porque el contexto ya era inválido.
    SkippedInvalid,
    /// Resultado resuelto y devuelto.
    Resolved,
}

impl ExecutionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExecutionState::Resolved)
    }
}
