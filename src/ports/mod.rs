/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The logger and the environment resolver only talk to these traits; the
/// adapters module provides the browser and native implementations.

pub mod clock;
pub mod console;
pub mod environment;
pub mod scheduler;

pub use clock::ClockPort;
pub use console::ConsolePort;
pub use environment::EnvironmentPort;
pub use scheduler::{SchedulerPort, Task};
