//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Unknown option '{value}' for field '{field}'")]
    UnknownOption { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown option validation error.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::InvalidFormat { field, .. }
            | Self::UnknownOption { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("email");
        assert_eq!(format!("{}", err), "Field 'email' cannot be empty");
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("state_transition", "Cannot go back");
        assert_eq!(
            format!("{}", err),
            "Field 'state_transition' has invalid format: Cannot go back"
        );
    }

    #[test]
    fn unknown_option_displays_correctly() {
        let err = ValidationError::unknown_option("license_type", "Borland");
        assert_eq!(
            format!("{}", err),
            "Unknown option 'Borland' for field 'license_type'"
        );
    }

    #[test]
    fn field_returns_offending_field() {
        assert_eq!(ValidationError::empty_field("name").field(), "name");
        assert_eq!(
            ValidationError::unknown_option("license_type", "x").field(),
            "license_type"
        );
    }
}
