//! Strict boolean coercion for configuration values

use crate::error::{Result, config::invalid_boolean};

const TRUE_TOKENS: &[&str] = &["true", "yes", "on", "1"];
const FALSE_TOKENS: &[&str] = &["false", "no", "off", "0"];

/// A value that may hold a boolean, either as text or natively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolInput<'a> {
    Text(&'a str),
    Bool(bool),
}

impl<'a> From<&'a str> for BoolInput<'a> {
    fn from(value: &'a str) -> Self {
        BoolInput::Text(value)
    }
}

impl<'a> From<&'a String> for BoolInput<'a> {
    fn from(value: &'a String) -> Self {
        BoolInput::Text(value.as_str())
    }
}

impl From<bool> for BoolInput<'_> {
    fn from(value: bool) -> Self {
        BoolInput::Bool(value)
    }
}

/// Parse a boolean.
///
/// Native booleans pass through. Text matches `true`, `yes`, `on`, `1` or
/// `false`, `no`, `off`, `0`, ignoring case; anything else is an
/// [`InvalidBoolean`](crate::error::ConfigError::InvalidBoolean) carrying the
/// original text.
pub fn parse_bool<'a>(input: impl Into<BoolInput<'a>>) -> Result<bool> {
    match input.into() {
        BoolInput::Bool(value) => Ok(value),
        BoolInput::Text(text) => {
            let lowered = text.to_lowercase();
            if TRUE_TOKENS.contains(&lowered.as_str()) {
                Ok(true)
            } else if FALSE_TOKENS.contains(&lowered.as_str()) {
                Ok(false)
            } else {
                Err(invalid_boolean(text))
            }
        }
    }
}
