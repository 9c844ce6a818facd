//! Error types and result aliases.
//!
//! Defines the core `CookieError` enumeration and common `Result` type.

use thiserror::Error;

/// Cookie signing and encoding errors.
///
/// Verification failures (missing cookies, unknown signatures) are not
/// errors; see [`crate::core::codec::Verification`].
#[derive(Debug, Error)]
pub enum CookieError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A cookie name, value or attribute failed validation.
    #[error("argument {field} is invalid")]
    Validation { field: &'static str },

    /// The signature matched but the payload could not be decoded.
    #[error("signed payload is corrupt: {0}")]
    Corrupt(String),

    /// The application value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CookieError {
    pub(crate) const fn invalid(field: &'static str) -> Self {
        Self::Validation { field }
    }
}

/// Result type alias for `CookieError`.
pub type Result<T> = std::result::Result<T, CookieError>;
