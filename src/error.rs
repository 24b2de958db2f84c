//! Error types for the masking library.
//!
//! Applying a mask never fails. Errors only arise while building a
//! [`MaskSpec`](crate::MaskSpec) from user-supplied regex sources or
//! serialized JSON.

use thiserror::Error;

/// Result type alias for specification construction.
pub type MaskerResult<T> = Result<T, MaskerError>;

/// Errors raised while constructing a mask specification.
#[derive(Debug, Error)]
pub enum MaskerError {
    /// An alternative's regex could not be compiled
    #[error("Invalid regex for mask '{template}' ('{pattern}'): {reason}")]
    InvalidRegex {
        template: String,
        pattern: String,
        reason: String,
    },

    /// Serialized specification did not match any recognized shape
    #[error("Invalid mask specification: {0}")]
    InvalidSpec(#[from] serde_json::Error),
}

impl MaskerError {
    pub(crate) fn invalid_regex(template: &str, pattern: &str, err: regex::Error) -> Self {
        Self::InvalidRegex {
            template: template.to_string(),
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaskerError::InvalidRegex {
            template: "AAA-9999".to_string(),
            pattern: "/[a-z/".to_string(),
            reason: "unclosed class".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid regex for mask 'AAA-9999' ('/[a-z/'): unclosed class"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MaskerError = serde_err.into();
        assert!(err.to_string().starts_with("Invalid mask specification"));
    }
}
