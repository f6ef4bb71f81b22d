//! Assertion helpers for domain test suites.

use core::fmt::Debug;

use crate::error::DomainError;
use crate::validation::FieldErrors;

/// Assert that `actual` holds every `(field, message)` pair in `expected`.
///
/// Extra fields or messages in `actual` are allowed.
#[track_caller]
pub fn assert_field_errors_contain(actual: &FieldErrors, expected: &[(&str, &str)]) {
    let missing: Vec<_> = expected
        .iter()
        .filter(|(field, message)| !actual.contains(field, message))
        .collect();

    assert!(
        missing.is_empty(),
        "The validation errors do not contain {missing:?}. Current: {}",
        serde_json::to_string(actual).unwrap_or_default()
    );
}

/// Assert that `result` failed validation with (at least) the expected messages.
///
/// ```ignore
/// use repokit_core::{DomainError, FieldErrors};
/// use repokit_core::testing::assert_contains_error_messages;
///
/// let mut errors = FieldErrors::new();
/// errors.add("name", "name should not be empty");
/// let result: Result<(), _> = Err(DomainError::validation(errors));
///
/// assert_contains_error_messages(result, &[("name", "name should not be empty")]);
/// ```
#[track_caller]
pub fn assert_contains_error_messages<T: Debug>(
    result: Result<T, DomainError>,
    expected: &[(&str, &str)],
) {
    match result {
        Err(DomainError::Validation(errors)) => assert_field_errors_contain(&errors, expected),
        Err(other) => panic!("expected a validation error, got {other:?}"),
        Ok(value) => panic!("expected a validation error, got Ok({value:?})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");
        errors.add("name", "name must be a string");
        errors
    }

    #[test]
    fn passes_when_expected_messages_present() {
        assert_field_errors_contain(&errors(), &[("name", "name must be a string")]);
        assert_contains_error_messages::<()>(
            Err(DomainError::validation(errors())),
            &[("name", "name should not be empty")],
        );
    }

    #[test]
    #[should_panic(expected = "do not contain")]
    fn fails_when_message_missing() {
        assert_field_errors_contain(&errors(), &[("description", "too long")]);
    }

    #[test]
    #[should_panic(expected = "expected a validation error")]
    fn fails_on_success() {
        assert_contains_error_messages(Ok(1), &[("name", "x")]);
    }
}
