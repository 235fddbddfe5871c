#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod config;
pub mod errors;
pub mod global;
pub mod macros;

#[cfg(target_arch = "wasm32")]
pub mod facades;

pub use config::LoggerConfig;
pub use domain::environment::GlobalKind;
pub use domain::level::{ConsoleChannel, Level};
pub use domain::logger::Logger;
pub use domain::observers::ObserverId;
pub use errors::LoggerError;
pub use platform::Platform;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
