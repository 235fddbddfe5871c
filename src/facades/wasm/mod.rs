pub mod converters;
pub mod global;
pub mod logger;
