//! Result and error types for Kata.

use thiserror::Error;

/// Message carried by [`KataError::OrderViolation`]
pub const ORDER_VIOLATION_MESSAGE: &str = "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element";

/// Message carried by [`KataError::DuplicateSingleton`]
pub const DUPLICATE_SINGLETON_MESSAGE: &str =
    "Element, id and pseudo-element should not occur more then one time inside the selector";

/// Result type for Kata operations
pub type KataResult<T> = Result<T, KataError>;

/// Errors that can occur in Kata
#[derive(Debug, Error)]
pub enum KataError {
    /// Fragment appended out of rank order
    #[error("{}", ORDER_VIOLATION_MESSAGE)]
    OrderViolation,

    /// Element, id or pseudo-element appended a second time
    #[error("{}", DUPLICATE_SINGLETON_MESSAGE)]
    DuplicateSingleton,

    /// JSON root is not an object
    #[error("Expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: String,
    },

    /// Declared field absent from the JSON object
    #[error("Missing field '{field}'")]
    MissingField {
        /// Field name
        field: String,
    },

    /// Positional value count does not match the constructor
    #[error("Expected {expected} values, found {found}")]
    ArityMismatch {
        /// Number of constructor parameters
        expected: usize,
        /// Number of values supplied
        found: usize,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Tracing subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized output was not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl KataError {
    /// Whether this error comes from the selector grammar
    #[must_use]
    pub const fn is_selector_error(&self) -> bool {
        matches!(self, Self::OrderViolation | Self::DuplicateSingleton)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn order_violation_message_is_fixed() {
        assert_eq!(
            KataError::OrderViolation.to_string(),
            "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
        );
    }

    #[test]
    fn duplicate_singleton_message_is_fixed() {
        assert_eq!(
            KataError::DuplicateSingleton.to_string(),
            "Element, id and pseudo-element should not occur more then one time inside the selector"
        );
    }

    #[test]
    fn arity_mismatch_display() {
        let err = KataError::ArityMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "Expected 2 values, found 3");
    }

    #[test]
    fn selector_error_classification() {
        assert!(KataError::OrderViolation.is_selector_error());
        assert!(KataError::DuplicateSingleton.is_selector_error());
        assert!(!KataError::MissingField {
            field: "width".to_string()
        }
        .is_selector_error());
    }

    #[test]
    fn utf8_error_converts() {
        let err: KataError = String::from_utf8(vec![0xff]).unwrap_err().into();
        assert!(matches!(err, KataError::Utf8(_)));
        assert!(err.to_string().starts_with("UTF-8 error:"));
    }

    #[test]
    fn json_error_converts() {
        let err: KataError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
