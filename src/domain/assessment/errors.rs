//! Assessment error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised while reading and normalizing a raw record.
///
/// All variants are produced before any scoring happens and are
/// returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unsupported value '{value}' for field '{field}'. Allowed values: {}", .allowed.join(", "))]
    UnsupportedValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl AssessmentError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        AssessmentError::MissingField { field: field.into() }
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AssessmentError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_value(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: Vec<String>,
    ) -> Self {
        AssessmentError::UnsupportedValue {
            field: field.into(),
            value: value.into(),
            allowed,
        }
    }

    /// The request field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            AssessmentError::MissingField { field }
            | AssessmentError::InvalidField { field, .. }
            | AssessmentError::UnsupportedValue { field, .. } => field,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::MissingField { .. } => ErrorCode::MissingField,
            AssessmentError::InvalidField { .. } => ErrorCode::InvalidField,
            AssessmentError::UnsupportedValue { .. } => ErrorCode::UnsupportedValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_field_name() {
        let err = AssessmentError::missing_field("stressLevel");
        assert_eq!(err.to_string(), "Missing required field 'stressLevel'");
        assert_eq!(err.field(), "stressLevel");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }

    #[test]
    fn unsupported_value_enumerates_allowed_set() {
        let err = AssessmentError::unsupported_value(
            "gender",
            "unknown",
            vec!["female".to_string(), "male".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Unsupported value 'unknown' for field 'gender'. Allowed values: female, male"
        );
        assert_eq!(err.code(), ErrorCode::UnsupportedValue);
    }

    #[test]
    fn invalid_field_includes_reason() {
        let err = AssessmentError::invalid_field("age", "expected an integer");
        assert_eq!(err.to_string(), "Invalid value for field 'age': expected an integer");
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }
}
