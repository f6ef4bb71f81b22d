//! `repokit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives and the storage-agnostic
//! repository contracts (no storage engine, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;
pub mod value_object;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use validation::{FieldErrors, Validate};
pub use value_object::ValueObject;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid;
}
