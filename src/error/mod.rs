//! Error types and handling for taxidi-conf
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration document and coercion errors
//! - [`fs`]: File system and resource mirroring errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for configuration discovery, bootstrap and access
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    // Environment errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(taxidi::env::no_home),
        help("Set USERPROFILE (Windows) or HOME to the user's home directory")
    )]
    NoHomeDirectory,

    // Bootstrap errors
    #[error("Could not create configuration at '{path}': {reason}")]
    #[diagnostic(
        code(taxidi::bootstrap::not_writable),
        help(
            "Check that config.ini.template ships beside the executable and that the destination directory is writable"
        )
    )]
    TemplateMissingOrUnwritable { path: String, reason: String },

    // Configuration document errors
    #[error("Failed to read configuration file '{path}': {reason}")]
    #[diagnostic(code(taxidi::config::read_failed))]
    ReadFailure { path: String, reason: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    #[diagnostic(
        code(taxidi::config::parse_failed),
        help("Fix the malformed line or delete the file to recreate it from the template")
    )]
    ParseFailure { path: String, reason: String },

    #[error("Failed to write configuration file '{path}': {reason}")]
    #[diagnostic(code(taxidi::config::write_failed))]
    WriteFailure { path: String, reason: String },

    #[error("Mangled boolean representation \"{value}\"")]
    #[diagnostic(
        code(taxidi::config::invalid_boolean),
        help("Accepted values: true, yes, on, 1, false, no, off, 0 (case-insensitive)")
    )]
    InvalidBoolean { value: String },

    #[error("Missing key '{key}' in section [{section}]")]
    #[diagnostic(code(taxidi::config::missing_key))]
    MissingKey { section: String, key: String },

    // Resource errors
    #[error("Failed to copy '{name}' resources: {reason}")]
    #[diagnostic(code(taxidi::resources::copy_failed))]
    ResourceCopyFailure { name: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(taxidi::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfigError>;
