use crate::domain::level::ConsoleChannel;
use crate::global::resolve_global;
use crate::ports::ConsolePort;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Prints through the `console` object of the resolved global scope, so the
/// same code works on the main thread and inside a worker.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn method(name: &str) -> Option<(Object, Function)> {
        let console = resolve_global().console()?;
        let method = Reflect::get(&console, &JsValue::from_str(name))
            .and_then(|value| value.dyn_into::<Function>())
            .ok()?;
        Some((console, method))
    }

    /// `console.<name>.apply(console, args)`
    fn apply(&self, name: &str, args: &Array) {
        if let Some((console, method)) = Self::method(name) {
            let _ = method.apply(&console, args);
        }
    }
}

fn method_name(channel: ConsoleChannel) -> &'static str {
    match channel {
        ConsoleChannel::Info => "info",
        ConsoleChannel::Warn => "warn",
        ConsoleChannel::Error => "error",
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for ConsoleLogger {
    fn info(&self, line: &str) {
        self.apply("info", &Array::of1(&JsValue::from_str(line)));
    }

    fn warn(&self, line: &str) {
        self.apply("warn", &Array::of1(&JsValue::from_str(line)));
    }

    fn error(&self, line: &str) {
        self.apply("error", &Array::of1(&JsValue::from_str(line)));
    }

    fn write_values(&self, channel: ConsoleChannel, prefix: &str, values: &Array) {
        let args = Array::of1(&JsValue::from_str(prefix)).concat(values);
        self.apply(method_name(channel), &args);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.info("test");
    }

    #[wasm_bindgen_test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.info("test info");
        logger.warn("test warn");
        logger.error("test error");
    }

    #[wasm_bindgen_test]
    fn test_write_values_with_objects() {
        let logger = ConsoleLogger::new();
        let values = Array::of2(&js_sys::Error::new("boom").into(), &JsValue::UNDEFINED);
        logger.write_values(ConsoleChannel::Error, "prefix", &values);
    }

    #[wasm_bindgen_test]
    fn test_method_names() {
        assert_eq!(method_name(ConsoleChannel::Info), "info");
        assert_eq!(method_name(ConsoleChannel::Warn), "warn");
        assert_eq!(method_name(ConsoleChannel::Error), "error");
    }
}
