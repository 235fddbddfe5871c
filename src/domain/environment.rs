use crate::ports::EnvironmentPort;

/// Which global object a context exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKind {
    /// Main-thread global, reachable as `window`.
    Window,
    /// Self-referential global (`self`) of a worker or any non-window host.
    WorkerSelf,
}

/// Picks the global object for the current context.
///
/// Best-effort detection: a missing `window` is taken to mean a worker or
/// other non-window host. It does not prove the host is a worker; use
/// [`detect_worker`] for that.
pub fn resolve_global_kind(env: &dyn EnvironmentPort) -> GlobalKind {
    if env.has_window() {
        GlobalKind::Window
    } else {
        GlobalKind::WorkerSelf
    }
}

/// True only when `WorkerGlobalScope` exists, the global is an instance of it
/// and `importScripts` is defined.
pub fn detect_worker(env: &dyn EnvironmentPort) -> bool {
    env.has_worker_scope_type() && env.global_is_worker_scope() && env.has_import_scripts()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeEnvironment {
        window: bool,
        worker_type: bool,
        worker_instance: bool,
        import_scripts: bool,
    }

    impl EnvironmentPort for FakeEnvironment {
        fn has_window(&self) -> bool {
            self.window
        }

        fn has_worker_scope_type(&self) -> bool {
            self.worker_type
        }

        fn global_is_worker_scope(&self) -> bool {
            self.worker_instance
        }

        fn has_import_scripts(&self) -> bool {
            self.import_scripts
        }
    }

    fn worker() -> FakeEnvironment {
        FakeEnvironment {
            window: false,
            worker_type: true,
            worker_instance: true,
            import_scripts: true,
        }
    }

    #[test]
    fn test_window_present_resolves_window() {
        let env = FakeEnvironment {
            window: true,
            ..Default::default()
        };
        assert_eq!(resolve_global_kind(&env), GlobalKind::Window);
    }

    #[test]
    fn test_window_missing_resolves_self() {
        assert_eq!(resolve_global_kind(&worker()), GlobalKind::WorkerSelf);
        assert_eq!(
            resolve_global_kind(&FakeEnvironment::default()),
            GlobalKind::WorkerSelf
        );
    }

    #[test]
    fn test_main_thread_is_not_worker() {
        let env = FakeEnvironment {
            window: true,
            ..Default::default()
        };
        assert!(!detect_worker(&env));
    }

    #[test]
    fn test_worker_requires_all_three_markers() {
        assert!(detect_worker(&worker()));

        let mut env = worker();
        env.worker_type = false;
        assert!(!detect_worker(&env));

        let mut env = worker();
        env.worker_instance = false;
        assert!(!detect_worker(&env));

        let mut env = worker();
        env.import_scripts = false;
        assert!(!detect_worker(&env));
    }

    #[test]
    fn test_non_browser_host_is_self_but_not_worker() {
        let env = FakeEnvironment::default();
        assert_eq!(resolve_global_kind(&env), GlobalKind::WorkerSelf);
        assert!(!detect_worker(&env));
    }
}
