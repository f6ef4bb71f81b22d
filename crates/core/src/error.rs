//! Domain error model.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed values, invariants). Storage concerns live in
/// [`RepositoryError`](crate::repository::RepositoryError).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity failed validation; carries every failing field.
    #[error("validation failed: {} field(s) invalid", .0.count())]
    Validation(FieldErrors),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier did not match its required format.
    #[error("invalid identifier format: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidId(input.into())
    }

    /// Field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_names_the_input() {
        let err = DomainError::invalid_id("not-a-uuid");
        assert_eq!(err.to_string(), "invalid identifier format: not-a-uuid");
    }

    #[test]
    fn validation_message_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");
        errors.add("description", "description must be a string");

        let err = DomainError::validation(errors.clone());
        assert_eq!(err.to_string(), "validation failed: 2 field(s) invalid");
        assert_eq!(err.field_errors(), Some(&errors));
    }

    #[test]
    fn non_validation_errors_have_no_field_errors() {
        assert!(DomainError::invariant("boom").field_errors().is_none());
    }
}
