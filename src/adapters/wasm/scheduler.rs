use crate::ports::{SchedulerPort, Task};
use gloo_timers::callback::Timeout;

/// Defers tasks to the next macrotask with a zero-delay `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulerPort for TimeoutScheduler {
    fn defer(&self, task: Task) {
        Timeout::new(0, task).forget();
    }
}
