use crate::ports::ConsolePort;
use std::io::{self, Write};

/// Native console using stdout/stderr.
///
/// `info` goes to stdout; `warn` and `error` go to stderr. A closed stream
/// drops the line instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for ConsoleLogger {
    fn info(&self, line: &str) {
        write_line(io::stdout().lock(), line);
    }

    fn warn(&self, line: &str) {
        write_line(io::stderr().lock(), line);
    }

    fn error(&self, line: &str) {
        write_line(io::stderr().lock(), line);
    }
}

fn write_line(mut out: impl Write, line: &str) {
    let _ = writeln!(out, "{line}");
}
