use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    UnknownLevel(String),
    InvalidConfig(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(name) => write!(f, "Unknown log level: {name}"),
            LoggerError::InvalidConfig(msg) => write!(f, "Invalid logger config: {msg}"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl LoggerError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LoggerError::InvalidConfig(message.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<LoggerError> for wasm_bindgen::JsValue {
    fn from(error: LoggerError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_message() {
        let err = LoggerError::UnknownLevel("verbose".to_string());
        assert_eq!(err.to_string(), "Unknown log level: verbose");
    }

    #[test]
    fn test_invalid_config_helper() {
        let err = LoggerError::invalid_config("missing field");
        assert_eq!(
            err,
            LoggerError::InvalidConfig("missing field".to_string())
        );
        assert_eq!(err.to_string(), "Invalid logger config: missing field");
    }
}
