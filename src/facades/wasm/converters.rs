use crate::config::LoggerConfig;
use crate::errors::LoggerError;
use wasm_bindgen::JsValue;

pub use crate::adapters::wasm::js_values::render_value;

/// `undefined`/`null` select the defaults; anything else must deserialize.
pub fn config_from_js(value: JsValue) -> Result<LoggerConfig, LoggerError> {
    if value.is_undefined() || value.is_null() {
        return Ok(LoggerConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| LoggerError::invalid_config(format!("{:?}", e)))
}
