//! Errors produced while reading options from an argument vector.

use thiserror::Error;

use super::{LongName, ShortName};

/// Result type for parser lookups
pub type ParseResult<T> = Result<T, ParserError>;

/// Failure of a single option lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// The option is absent, malformed, or carries no usable value
    #[error("Argument '{long}' ('{short}') is missing.")]
    ArgumentMissing { short: ShortName, long: LongName },

    /// The option is present but its value was rejected by the caller
    #[error("{message}")]
    InvalidValue { message: String },
}

impl ParserError {
    pub fn missing(short: &ShortName, long: &LongName) -> Self {
        ParserError::ArgumentMissing {
            short: short.clone(),
            long: long.clone(),
        }
    }

    /// Builds the standard "invalid value" error for an option
    pub fn invalid_value(short: &ShortName, long: &LongName, value: &str) -> Self {
        ParserError::InvalidValue {
            message: format!("Invalid value for argument (-{short}, --{long}): '{value}'."),
        }
    }

    /// Whether this error only means "the option was not supplied"
    pub fn is_missing(&self) -> bool {
        matches!(self, ParserError::ArgumentMissing { .. })
    }
}
