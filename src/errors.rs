//! # Error Handling
//!
//! Building a `$filter` payload never fails: unknown shortcodes degrade to
//! equality filters and unsupported filter shapes encode to nothing. Errors
//! only surface on the edges of the crate:
//!
//! - parsing numeric paging values (`page`, `pageSize`, `$top`, `$skip`) out
//!   of string parameters
//! - loading a [`LinqConfig`](crate::config::LinqConfig) from JSON
//! - serializing the descriptor payload
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dynamic_linq::{LinqConfig, LinqError, QueryBuilder};
//!
//! fn build(params: &[(String, String)]) -> Result<String, LinqError> {
//!     let config = LinqConfig::default();
//!     Ok(QueryBuilder::from_params("/api/users", params, &config)?.build())
//! }
//! ```

use std::fmt;

/// Errors raised outside the tolerant filter-encoding path
#[derive(Debug)]
pub enum LinqError {
    /// A paging parameter could not be read as an unsigned integer
    InvalidNumber {
        /// Parameter key (e.g., "pageSize", "$top")
        key: String,
        /// Raw value as received
        value: String,
    },

    /// Configuration was structurally valid JSON but semantically unusable
    Config {
        /// Description of the offending setting
        message: String,
    },

    /// JSON (de)serialization failed
    Serialization(serde_json::Error),
}

impl LinqError {
    /// Create an invalid number error for a paging parameter
    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl fmt::Display for LinqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "parameter '{key}' expects an unsigned integer, got '{value}'")
            }
            Self::Config { message } => write!(f, "invalid configuration: {message}"),
            Self::Serialization(err) => write!(f, "serialization failed: {err}"),
        }
    }
}

impl std::error::Error for LinqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LinqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_number_message() {
        let err = LinqError::invalid_number("pageSize", "ten");
        assert_eq!(
            err.to_string(),
            "parameter 'pageSize' expects an unsigned integer, got 'ten'"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_message() {
        let err = LinqError::config("page_key must not be empty");
        assert_eq!(err.to_string(), "invalid configuration: page_key must not be empty");
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LinqError = json_err.into();
        assert!(matches!(err, LinqError::Serialization(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("serialization failed"));
    }
}
