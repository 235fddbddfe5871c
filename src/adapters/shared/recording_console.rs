use crate::domain::level::ConsoleChannel;
use crate::ports::ConsolePort;
use parking_lot::Mutex;

/// Console that keeps every printed line in memory, tagged with its channel.
#[derive(Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<(ConsoleChannel, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(ConsoleChannel, String)> {
        self.lines.lock().clone()
    }

    pub fn take(&self) -> Vec<(ConsoleChannel, String)> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl ConsolePort for RecordingConsole {
    fn info(&self, line: &str) {
        self.write(ConsoleChannel::Info, line);
    }

    fn warn(&self, line: &str) {
        self.write(ConsoleChannel::Warn, line);
    }

    fn error(&self, line: &str) {
        self.write(ConsoleChannel::Error, line);
    }

    fn write(&self, channel: ConsoleChannel, line: &str) {
        self.lines.lock().push((channel, line.to_string()));
    }
}
