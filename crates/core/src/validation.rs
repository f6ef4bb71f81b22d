//! Field-level validation results.
//!
//! Entities run their own checks after construction and after every mutation
//! (see [`Validate`]); failures are aggregated per field instead of stopping at
//! the first problem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. Messages for the same field accumulate.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Number of fields with at least one message.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// True when `field` has a message equal to `message`.
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(())` when empty, otherwise a [`DomainError::Validation`].
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

/// Explicit invariant check for entities.
///
/// Implementors call [`Validate::ensure_valid`] from their validating factory and
/// from each mutator, so invalid state is reported right where it is produced.
pub trait Validate {
    /// Collect every field error for the current state.
    fn validate(&self) -> FieldErrors;

    fn ensure_valid(&self) -> DomainResult<()> {
        self.validate().into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);

    impl Validate for Named {
        fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.0.is_empty() {
                errors.add("name", "name should not be empty");
            }
            errors
        }
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "a");
        errors.add("name", "b");
        errors.add("other", "c");

        assert_eq!(errors.count(), 2);
        assert_eq!(errors.get("name"), Some(&["a".to_string(), "b".to_string()][..]));
        assert!(errors.contains("other", "c"));
        assert!(!errors.contains("other", "a"));
    }

    #[test]
    fn ensure_valid_reports_field_errors() {
        assert!(Named("drama".into()).ensure_valid().is_ok());

        let err = Named(String::new()).ensure_valid().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("name", "name should not be empty"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["required"] }));
    }
}
