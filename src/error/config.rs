//! Configuration errors

use super::ConfigError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::ReadFailure {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::ParseFailure {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::WriteFailure {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid boolean error carrying the original text
pub fn invalid_boolean(value: impl Into<String>) -> ConfigError {
    ConfigError::InvalidBoolean {
        value: value.into(),
    }
}

pub fn missing_key(section: impl Into<String>, key: impl Into<String>) -> ConfigError {
    ConfigError::MissingKey {
        section: section.into(),
        key: key.into(),
    }
}
