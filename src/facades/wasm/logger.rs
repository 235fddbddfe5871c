use super::converters::{config_from_js, render_value};
use crate::config::LoggerConfig;
use crate::domain::level::Level;
use crate::domain::logger::Logger;
use crate::platform::Platform;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

/// JS-facing logger: `setLevel`, `debug/info/warn/error` and the
/// `onDebug/onInfo/onWarn/onError` callback properties.
///
/// Arguments stay JS values end to end: the console receives them as
/// separate arguments after the prefix, and callbacks get the same array.
/// Rust observers registered on [`JsLogger::logger`] see their text form.
#[wasm_bindgen(js_name = Logger)]
pub struct JsLogger {
    logger: Logger,
    callbacks: [Option<Function>; 4],
}

#[wasm_bindgen(js_class = Logger)]
impl JsLogger {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsLogger, JsValue> {
        let config = config_from_js(config)?;
        Ok(JsLogger::with_platform(Platform::new(), &config))
    }

    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&self, level: &str) {
        self.logger.set_level(level);
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> String {
        self.logger.level().name().to_string()
    }

    pub fn debug(&self, args: Vec<JsValue>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: Vec<JsValue>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: Vec<JsValue>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, args: Vec<JsValue>) {
        self.log(Level::Error, args);
    }

    #[wasm_bindgen(getter = onDebug)]
    pub fn on_debug(&self) -> Option<Function> {
        self.callback(Level::Debug)
    }

    #[wasm_bindgen(setter = onDebug)]
    pub fn set_on_debug(&mut self, callback: Option<Function>) {
        self.set_callback(Level::Debug, callback);
    }

    #[wasm_bindgen(getter = onInfo)]
    pub fn on_info(&self) -> Option<Function> {
        self.callback(Level::Info)
    }

    #[wasm_bindgen(setter = onInfo)]
    pub fn set_on_info(&mut self, callback: Option<Function>) {
        self.set_callback(Level::Info, callback);
    }

    #[wasm_bindgen(getter = onWarn)]
    pub fn on_warn(&self) -> Option<Function> {
        self.callback(Level::Warn)
    }

    #[wasm_bindgen(setter = onWarn)]
    pub fn set_on_warn(&mut self, callback: Option<Function>) {
        self.set_callback(Level::Warn, callback);
    }

    #[wasm_bindgen(getter = onError)]
    pub fn on_error(&self) -> Option<Function> {
        self.callback(Level::Error)
    }

    #[wasm_bindgen(setter = onError)]
    pub fn set_on_error(&mut self, callback: Option<Function>) {
        self.set_callback(Level::Error, callback);
    }
}

impl JsLogger {
    pub fn with_platform(platform: Platform, config: &LoggerConfig) -> Self {
        JsLogger {
            logger: Logger::from_config(platform, config),
            callbacks: Default::default(),
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn log(&self, level: Level, args: Vec<JsValue>) {
        if !self.logger.is_enabled(level) {
            return;
        }

        let values: Array = args.into_iter().collect();
        let platform = self.logger.platform();
        platform
            .console()
            .write_values(level.channel(), &self.logger.line_prefix(level), &values);

        self.logger
            .notify(level, values.iter().map(|value| render_value(&value)));

        if let Some(callback) = self.callback(level) {
            let platform = platform.clone();
            // JS functions are not `Send`, so they bypass the platform scheduler.
            Timeout::new(0, move || {
                if let Err(err) = callback.call1(&JsValue::NULL, &values) {
                    platform.console().error(&format!(
                        "[scope-console] {} callback threw: {}",
                        callback_name(level),
                        render_value(&err)
                    ));
                }
            })
            .forget();
        }
    }

    fn callback(&self, level: Level) -> Option<Function> {
        self.callbacks[level.rank() as usize].clone()
    }

    fn set_callback(&mut self, level: Level, callback: Option<Function>) {
        self.callbacks[level.rank() as usize] = callback;
    }
}

fn callback_name(level: Level) -> &'static str {
    match level {
        Level::Debug => "onDebug",
        Level::Info => "onInfo",
        Level::Warn => "onWarn",
        Level::Error => "onError",
    }
}
