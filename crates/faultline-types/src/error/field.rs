//! Container field rejections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A report or request container refused to store a value.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FieldError {
    /// The value has the wrong shape for the field
    #[error("{field} expects {expected}, got {found}")]
    TypeMismatch {
        /// Wire name of the rejecting field
        field: String,
        /// Shape the field accepts
        expected: String,
        /// Shape that was supplied
        found: String,
    },

    /// The value has the right shape but falls outside the accepted range
    #[error("{field} is out of range: {value}")]
    OutOfRange {
        /// Wire name of the rejecting field
        field: String,
        /// Rendered offending value
        value: String,
    },
}

impl FieldError {
    /// Create a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch { field: field.into(), expected: expected.into(), found: found.into() }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::OutOfRange { field: field.into(), value: value.into() }
    }

    /// Wire name of the field that rejected the value.
    pub fn field(&self) -> &str {
        match self {
            Self::TypeMismatch { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        assert_eq!(FieldError::type_mismatch("message", "string", "number").field(), "message");
        assert_eq!(FieldError::out_of_range("statusCode", "70000").field(), "statusCode");
    }

    #[test]
    fn test_display_mentions_shapes() {
        let msg = FieldError::type_mismatch("user", "string", "array").to_string();
        assert_eq!(msg, "user expects string, got array");
    }
}
