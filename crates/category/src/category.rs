use chrono::{DateTime, Utc};
use serde::Serialize;

use repokit_core::{DomainResult, Entity, FieldErrors, Validate};

/// Longest accepted category name, in characters.
pub const NAME_MAX_LEN: usize = 255;

repokit_core::uuid_identifier! {
    /// Category identifier.
    pub struct CategoryId;
}

/// Constructor input; absent values get defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProps {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Command: CreateCategory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Entity: Category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build a category without validating it (rehydration, fixtures).
    ///
    /// Defaults: fresh id, no description, active, created now.
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create a new, validated category.
    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        let category = Self::new(CategoryProps {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            ..Default::default()
        });
        category.ensure_valid()?;
        Ok(category)
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename; the previous name is kept when the new one is invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        self.ensure_valid().inspect_err(|_| self.name = previous)
    }

    /// Replace the description; the previous one is kept when invalid.
    pub fn change_description(&mut self, description: Option<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.description, description);
        self.ensure_valid()
            .inspect_err(|_| self.description = previous)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Validate for Category {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.is_empty() {
            errors.add("name", "name should not be empty");
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            errors.add(
                "name",
                format!("name must be shorter than or equal to {NAME_MAX_LEN} characters"),
            );
        }
        errors
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }
}
