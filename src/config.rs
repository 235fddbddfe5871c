use crate::domain::level::Level;
use crate::errors::LoggerError;
use serde::Deserialize;

/// Logger settings. Every field is optional in the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Level,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, LoggerError> {
        serde_json::from_str(json).map_err(|e| LoggerError::invalid_config(e.to_string()))
    }
}
