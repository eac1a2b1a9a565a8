//! Route derivation errors.

use thiserror::Error;

/// Format a zone identifier must have to be accepted.
pub const ZONE_ID_FORMAT: &str = "32 lowercase hexadecimal characters";

/// Errors raised while deriving routes for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A value the domain needs for routing was not supplied.
    #[error("Configuration error for domain `{domain}`: {message}")]
    Configuration { domain: String, message: String },

    /// A supplied value failed its format check.
    #[error("Validation error for domain `{domain}`: `{value}` is not {expected}")]
    Validation {
        domain: String,
        value: String,
        expected: &'static str,
    },
}

impl RouteError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, RouteError::Configuration { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RouteError::Validation { .. })
    }
}

/// Result type for route derivation.
pub type RouteResult<T> = Result<T, RouteError>;
