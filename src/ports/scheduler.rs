/// Unit of deferred work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Scheduler port - runs work after the current synchronous call has returned.
///
/// Implementations never run the task inline inside `defer`. There is no
/// ordering guarantee relative to work deferred elsewhere, and no way to
/// cancel a task once submitted.
pub trait SchedulerPort: Send + Sync {
    fn defer(&self, task: Task);
}
