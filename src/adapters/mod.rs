/// Adapters module - platform-specific implementations of ports.

pub mod global_scheduler;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger, Environment};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger, Environment};

pub use global_scheduler::scheduler;
