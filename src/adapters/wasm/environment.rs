use crate::ports::EnvironmentPort;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::WorkerGlobalScope;

/// Reads the markers straight off `globalThis`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Environment {
    pub fn new() -> Self {
        Self
    }
}

fn is_defined(target: &Object, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}

impl EnvironmentPort for Environment {
    fn has_window(&self) -> bool {
        is_defined(&js_sys::global(), "window")
    }

    fn has_worker_scope_type(&self) -> bool {
        is_defined(&js_sys::global(), "WorkerGlobalScope")
    }

    fn global_is_worker_scope(&self) -> bool {
        js_sys::global().is_instance_of::<WorkerGlobalScope>()
    }

    fn has_import_scripts(&self) -> bool {
        is_defined(&js_sys::global(), "importScripts")
    }
}
