use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = resolveGlobal)]
pub fn resolve_global() -> JsValue {
    crate::global::resolve_global().into()
}

#[wasm_bindgen(js_name = isWorkerContext)]
pub fn is_worker_context() -> bool {
    crate::global::is_worker_context()
}
