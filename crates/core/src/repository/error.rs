//! Repository error model.

use thiserror::Error;

use crate::error::DomainError;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
///
/// `NotFound` is the only failure the repository raises on its own; domain
/// errors from collaborators pass through unchanged in `Domain`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No stored entity matched the given identity (or identities).
    #[error("Entity {entity} Not found using id {}", .ids.join(", "))]
    NotFound { entity: String, ids: Vec<String> },

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage backend failed (e.g. a poisoned in-memory lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            ids: vec![id.to_string()],
        }
    }

    pub fn not_found_many<I, T>(entity: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self::NotFound {
            entity: entity.into(),
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrors;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = RepositoryError::not_found("Category", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity Category Not found using id abc");
    }

    #[test]
    fn not_found_many_joins_ids() {
        let err = RepositoryError::not_found_many("Category", ["a", "b", "c"]);
        assert_eq!(err.to_string(), "Entity Category Not found using id a, b, c");
    }

    #[test]
    fn domain_errors_pass_through_unchanged() {
        let mut fields = FieldErrors::new();
        fields.add("name", "name should not be empty");
        let domain = DomainError::validation(fields);

        let err: RepositoryError = domain.clone().into();
        assert_eq!(err, RepositoryError::Domain(domain.clone()));
        assert_eq!(err.to_string(), domain.to_string());
        assert!(!err.is_not_found());
    }
}
