/// Probe over the host's global object.
///
/// Each method answers one of the questions the browser/worker heuristics
/// are built from. Implementations must not have side effects.
pub trait EnvironmentPort: Send + Sync {
    /// `typeof window !== 'undefined'`
    fn has_window(&self) -> bool;

    /// `typeof WorkerGlobalScope !== 'undefined'`
    fn has_worker_scope_type(&self) -> bool;

    /// `self instanceof WorkerGlobalScope`
    fn global_is_worker_scope(&self) -> bool;

    /// `typeof importScripts !== 'undefined'`
    fn has_import_scripts(&self) -> bool;
}
