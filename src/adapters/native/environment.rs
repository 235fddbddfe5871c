use crate::ports::EnvironmentPort;

/// Native processes have no `window`, no `WorkerGlobalScope` and no
/// `importScripts`: they resolve to the self global and are never workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Environment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentPort for Environment {
    fn has_window(&self) -> bool {
        false
    }

    fn has_worker_scope_type(&self) -> bool {
        false
    }

    fn global_is_worker_scope(&self) -> bool {
        false
    }

    fn has_import_scripts(&self) -> bool {
        false
    }
}
