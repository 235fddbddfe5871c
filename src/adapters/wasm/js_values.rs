use js_sys::{BigInt, Object};
use wasm_bindgen::{JsCast, JsValue};

/// Text form of a JS value for sinks that only take strings.
///
/// Strings are verbatim, `Error`s use `toString()`, plain data goes through
/// `JSON.stringify`. Values JSON cannot encode (circular objects, symbols)
/// fall back to `Object.prototype.toString` or the debug form.
pub fn render_value(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    if let Some(big) = value.dyn_ref::<BigInt>() {
        if let Ok(digits) = big.to_string(10) {
            return String::from(digits);
        }
    }
    if let Some(json) = js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()) {
        return json;
    }
    if let Some(object) = value.dyn_ref::<Object>() {
        return String::from(object.to_string());
    }
    format!("{:?}", value)
}
