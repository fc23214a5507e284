//! # Error Types
//!
//! Structured error types for pour_core. The engine itself raises no domain
//! errors; everything here describes a broken input contract, reported with
//! enough context (field path, offending value, violated constraint) for a
//! form or an API client to point at the exact input to fix.
//!
//! ## Example
//!
//! ```rust
//! use pour_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_travel(miles: f64) -> EstimateResult<()> {
//!     if miles < 0.0 {
//!         return Err(EstimateError::InvalidInput {
//!             field: "travel_distance".to_string(),
//!             value: miles.to_string(),
//!             reason: "travel distance must be zero or greater".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_travel(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pour_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value violates the parameter contract (out of range, not one
    /// of the allowed values, inconsistent with another field)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The parameter record could not be parsed (malformed JSON, unknown
    /// enum key, missing field)
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        EstimateError::Serialization {
            reason: reason.into(),
        }
    }

    /// Field path of the offending input, if the error names one
    pub fn field(&self) -> Option<&str> {
        match self {
            EstimateError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::serialization(err.to_string())
    }
}
