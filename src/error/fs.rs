//! File system errors

use super::ConfigError;

/// Creates a resource copy failure for one resource name
pub fn resource_copy_failed(name: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::ResourceCopyFailure {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a not-writable error for a configuration that could not be created
pub fn not_writable(path: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::TemplateMissingOrUnwritable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ConfigError {
    ConfigError::IoError {
        message: message.into(),
    }
}
