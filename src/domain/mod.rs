pub mod environment;
pub mod format;
pub mod level;
pub mod logger;
pub mod observers;
