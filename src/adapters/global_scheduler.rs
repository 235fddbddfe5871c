/// Shared scheduler instance - selected at compile time from the build target.
///
/// Native builds share one observer thread across every `Platform`; WASM
/// builds use zero-delay timeouts.
use crate::ports::SchedulerPort;
use once_cell::sync::Lazy;
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
static SCHEDULER: Lazy<Arc<dyn SchedulerPort>> =
    Lazy::new(|| Arc::new(crate::adapters::wasm::TimeoutScheduler::new()));

#[cfg(not(target_arch = "wasm32"))]
static SCHEDULER: Lazy<Arc<dyn SchedulerPort>> = Lazy::new(|| {
    Arc::new(crate::adapters::native::ThreadScheduler::spawn(Arc::new(
        crate::adapters::native::ConsoleLogger::new(),
    )))
});

/// Get the shared scheduler.
#[inline]
pub fn scheduler() -> Arc<dyn SchedulerPort> {
    Arc::clone(&SCHEDULER)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_shared_scheduler_is_reused() {
        assert!(Arc::ptr_eq(&scheduler(), &scheduler()));
    }

    #[test]
    fn test_shared_scheduler_runs_tasks() {
        let (tx, rx) = mpsc::channel();
        scheduler().defer(Box::new(move || {
            let _ = tx.send(7);
        }));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(7));
    }
}
