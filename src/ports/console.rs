use crate::domain::level::ConsoleChannel;

/// Console port - the sink formatted log lines are printed to.
///
/// Abstracts the output channel from platform-specific implementations:
/// - WASM: the `console` object of the resolved global scope
/// - Native: stdout for `info`, stderr for `warn` and `error`
pub trait ConsolePort: Send + Sync {
    /// Print on the informational channel (`console.info`).
    fn info(&self, line: &str);

    /// Print on the warning channel (`console.warn`).
    fn warn(&self, line: &str);

    /// Print on the error channel (`console.error`).
    fn error(&self, line: &str);

    /// Dispatch to the method matching `channel`.
    fn write(&self, channel: ConsoleChannel, line: &str) {
        match channel {
            ConsoleChannel::Info => self.info(line),
            ConsoleChannel::Warn => self.warn(line),
            ConsoleChannel::Error => self.error(line),
        }
    }

    /// Print `prefix` followed by raw JS values. The default renders each
    /// value to text and calls [`ConsolePort::write`]; the browser console
    /// overrides it to hand the values over untouched.
    #[cfg(target_arch = "wasm32")]
    fn write_values(&self, channel: ConsoleChannel, prefix: &str, values: &js_sys::Array) {
        let mut line = prefix.to_string();
        for value in values.iter() {
            line.push(' ');
            line.push_str(&crate::adapters::wasm::js_values::render_value(&value));
        }
        self.write(channel, &line);
    }
}
