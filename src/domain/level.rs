use crate::errors::LoggerError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Severity of a log call. Ordered by rank: `Debug < Info < Warn < Error`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

/// Console method a line is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleChannel {
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::rank`]. Ranks above 3 clamp to `Error`.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            _ => Level::Error,
        }
    }

    /// Lenient mapping used by `Logger::set_level`: anything that is not one of
    /// the four names selects `Error`, the most restrictive filter.
    pub fn from_name_or_error(name: &str) -> Self {
        name.parse().unwrap_or(Level::Error)
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }

    pub fn channel(self) -> ConsoleChannel {
        match self {
            Level::Debug | Level::Info => ConsoleChannel::Info,
            Level::Warn => ConsoleChannel::Warn,
            Level::Error => ConsoleChannel::Error,
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(LoggerError::UnknownLevel(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
