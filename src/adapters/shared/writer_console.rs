use crate::ports::ConsolePort;
use parking_lot::Mutex;
use std::io::Write;

/// Console that sends every channel to one caller-supplied writer.
///
/// Write errors are swallowed: printing a log line never fails the caller.
pub struct WriterConsole<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }
}

impl<W: Write + Send> ConsolePort for WriterConsole<W> {
    fn info(&self, line: &str) {
        self.write_line(line);
    }

    fn warn(&self, line: &str) {
        self.write_line(line);
    }

    fn error(&self, line: &str) {
        self.write_line(line);
    }
}
