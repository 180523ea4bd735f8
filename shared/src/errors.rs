//! Error types for the calculator library

use serde::Serialize;
use thiserror::Error;

/// Failures surfaced by input validation and formula evaluation
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    /// Input is non-numeric, out of range, or physically impossible
    #[error("{field}: {message}")]
    InvalidInput { field: String, message: String },

    /// The formula would produce a mathematically undefined value
    #[error("undefined result: {message}")]
    UndefinedResult { message: String },
}

impl CalcError {
    /// Build an `InvalidInput` error for a named field
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build an `UndefinedResult` error
    pub fn undefined(message: impl Into<String>) -> Self {
        CalcError::UndefinedResult {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the library
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CalcError::invalid("weight", "must be at least 20 kg");
        assert_eq!(err.to_string(), "weight: must be at least 20 kg");
    }

    #[test]
    fn test_undefined_result_message() {
        let err = CalcError::undefined("log of non-positive circumference");
        assert_eq!(
            err.to_string(),
            "undefined result: log of non-positive circumference"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = CalcError::invalid("age", "out of range");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_input");
        assert_eq!(json["field"], "age");
    }
}
