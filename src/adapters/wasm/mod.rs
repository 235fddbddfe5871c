/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod environment;
pub mod js_values;
pub mod scheduler;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use environment::Environment;
pub use scheduler::TimeoutScheduler;
