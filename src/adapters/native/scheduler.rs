use crate::ports::{ConsolePort, SchedulerPort, Task};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Runs deferred tasks on one dedicated background thread, in submission order.
///
/// A panicking task is caught and reported on the error channel of `console`;
/// the worker keeps running. If the worker thread cannot be spawned, deferred
/// tasks are reported and dropped.
pub struct ThreadScheduler {
    tx: Mutex<Option<mpsc::Sender<Task>>>,
    console: Arc<dyn ConsolePort>,
}

impl ThreadScheduler {
    pub fn spawn(console: Arc<dyn ConsolePort>) -> Self {
        let (tx, rx) = mpsc::channel::<Task>();
        let worker_console = Arc::clone(&console);

        let spawned = thread::Builder::new()
            .name("scope-console-observers".into())
            .spawn(move || {
                while let Ok(task) = rx.recv() {
                    if let Err(payload) = catch_unwind(AssertUnwindSafe(task)) {
                        worker_console.error(&format!(
                            "[scope-console] observer panicked: {}",
                            panic_message(payload.as_ref())
                        ));
                    }
                }
            });

        let tx = match spawned {
            Ok(_) => Some(tx),
            Err(e) => {
                console.error(&format!(
                    "[scope-console] failed to spawn observer thread: {e}"
                ));
                None
            }
        };

        Self {
            tx: Mutex::new(tx),
            console,
        }
    }
}

impl SchedulerPort for ThreadScheduler {
    fn defer(&self, task: Task) {
        let delivered = match self.tx.lock().as_ref() {
            Some(tx) => tx.send(task).is_ok(),
            None => false,
        };
        if !delivered {
            self.console
                .error("[scope-console] observer thread unavailable, task dropped");
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::shared::RecordingConsole;
    use std::time::Duration;

    #[test]
    fn test_task_runs_on_worker_thread() {
        let scheduler = ThreadScheduler::spawn(Arc::new(RecordingConsole::new()));
        let (tx, rx) = mpsc::channel();
        let caller = thread::current().id();

        scheduler.defer(Box::new(move || {
            let _ = tx.send(thread::current().id());
        }));

        let worker = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("task should run");
        assert_ne!(worker, caller);
    }

    #[test]
    fn test_panicking_task_is_reported_and_worker_survives() {
        let console = Arc::new(RecordingConsole::new());
        let scheduler = ThreadScheduler::spawn(console.clone());
        let (tx, rx) = mpsc::channel();

        scheduler.defer(Box::new(|| panic!("observer exploded")));
        scheduler.defer(Box::new(move || {
            let _ = tx.send(());
        }));

        rx.recv_timeout(Duration::from_secs(5))
            .expect("worker should survive a panicking task");

        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.contains("observer exploded"));
    }

    #[test]
    fn test_panic_message_variants() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42u32), "unknown panic");
    }
}
