/// Target-independent adapters.

pub mod fixed_clock;
pub mod recording_console;
pub mod task_queue;
pub mod writer_console;

pub use fixed_clock::FixedClock;
pub use recording_console::RecordingConsole;
pub use task_queue::TaskQueue;
pub use writer_console::WriterConsole;
