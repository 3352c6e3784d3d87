//! # Error Types
//!
//! Structured error types for deck_core. Navigation and estimation never
//! fail; these errors come from the edges of the system: settings files,
//! text entry in the terminal presenter, and catalog lookups by index.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{DeckError, DeckResult};
//!
//! fn parse_age(raw: &str) -> DeckResult<f64> {
//!     raw.trim().parse().map_err(|_| {
//!         DeckError::invalid_input("age_days", raw, "Expected a number of days")
//!     })
//! }
//!
//! assert!(parse_age("28").is_ok());
//! assert_eq!(parse_age("soon").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Structured error type for deck operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DeckError {
    /// A value could not be interpreted (not a number, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A mix field name that the calculator does not know
    #[error("Unknown mix field: {field}")]
    UnknownField { field: String },

    /// Slide index outside the deck
    #[error("Slide {index} is out of range (deck has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl DeckError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DeckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        DeckError::UnknownField {
            field: field.into(),
        }
    }

    pub fn slide_out_of_range(index: usize, count: usize) -> Self {
        DeckError::SlideOutOfRange { index, count }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        DeckError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::InvalidInput { .. } => "INVALID_INPUT",
            DeckError::UnknownField { .. } => "UNKNOWN_FIELD",
            DeckError::SlideOutOfRange { .. } => "SLIDE_OUT_OF_RANGE",
            DeckError::FileError { .. } => "FILE_ERROR",
            DeckError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DeckError::slide_out_of_range(12, 9);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"SlideOutOfRange\""));
        let roundtrip: DeckError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DeckError::unknown_field("fly_ash").error_code(), "UNKNOWN_FIELD");
        assert_eq!(
            DeckError::file_error("read", "deck.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_display_message() {
        let error = DeckError::invalid_input("cement_kg_m3", "lots", "Expected a number");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'cement_kg_m3': lots - Expected a number"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: DeckError = parse_err.into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
