//! Global scope resolution for main-thread and worker contexts.
//!
//! Detection is heuristic: it looks at which well-known globals exist and
//! makes no formal capability check.

use crate::adapters::Environment;
use crate::domain::environment::{detect_worker, resolve_global_kind, GlobalKind};

/// Which global object the current context exposes.
pub fn global_kind() -> GlobalKind {
    resolve_global_kind(&Environment::new())
}

/// True only inside a worker: `WorkerGlobalScope` exists, the global is an
/// instance of it and `importScripts` is defined.
pub fn is_worker_context() -> bool {
    detect_worker(&Environment::new())
}

#[cfg(target_arch = "wasm32")]
pub use browser::{resolve_global, GlobalScope};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use js_sys::{Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::Window;

    /// The platform global object.
    #[derive(Debug, Clone)]
    pub enum GlobalScope {
        Window(Window),
        WorkerSelf(Object),
    }

    impl GlobalScope {
        pub fn kind(&self) -> GlobalKind {
            match self {
                GlobalScope::Window(_) => GlobalKind::Window,
                GlobalScope::WorkerSelf(_) => GlobalKind::WorkerSelf,
            }
        }

        pub fn as_object(&self) -> &Object {
            match self {
                GlobalScope::Window(window) => window.unchecked_ref(),
                GlobalScope::WorkerSelf(scope) => scope,
            }
        }

        /// The `console` object hanging off this global, if any.
        pub fn console(&self) -> Option<Object> {
            Reflect::get(self.as_object(), &JsValue::from_str("console"))
                .ok()
                .filter(|value| value.is_object())
                .map(|value| value.unchecked_into())
        }
    }

    impl From<GlobalScope> for JsValue {
        fn from(scope: GlobalScope) -> Self {
            match scope {
                GlobalScope::Window(window) => window.into(),
                GlobalScope::WorkerSelf(scope) => scope.into(),
            }
        }
    }

    /// Returns `window` when it is defined, otherwise the self-referential
    /// global of the worker (or other non-window host).
    pub fn resolve_global() -> GlobalScope {
        let global = js_sys::global();
        match resolve_global_kind(&Environment::new()) {
            GlobalKind::Window => {
                match Reflect::get(&global, &JsValue::from_str("window")) {
                    Ok(window) if window.is_object() => GlobalScope::Window(window.unchecked_into()),
                    _ => GlobalScope::WorkerSelf(global),
                }
            }
            GlobalKind::WorkerSelf => GlobalScope::WorkerSelf(global),
        }
    }
}
