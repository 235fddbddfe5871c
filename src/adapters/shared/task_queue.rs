use crate::ports::{SchedulerPort, Task};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Scheduler whose tasks run only when the host calls [`TaskQueue::run_pending`].
///
/// Suits applications that own their event loop, and makes deferred
/// observers deterministic in tests.
#[derive(Default)]
pub struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Runs the tasks queued before this call and returns how many ran.
    /// Tasks deferred while running wait for the next call.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<Task> = self.tasks.lock().drain(..).collect();
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }
}

impl SchedulerPort for TaskQueue {
    fn defer(&self, task: Task) {
        self.tasks.lock().push_back(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_defer_does_not_run_inline() {
        let queue = TaskQueue::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        queue.defer(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_runs_in_submission_order() {
        let queue = TaskQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let order = Arc::clone(&order);
            queue.defer(Box::new(move || order.lock().push(i)));
        }
        queue.run_pending();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_nested_defer_waits_for_next_run() {
        let queue = Arc::new(TaskQueue::new());
        let inner_queue = Arc::clone(&queue);
        queue.defer(Box::new(move || {
            inner_queue.defer(Box::new(|| {}));
        }));

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.run_pending(), 1);
    }
}
