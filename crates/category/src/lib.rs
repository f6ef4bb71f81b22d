//! Category catalog entity and its repositories.

pub mod category;
pub mod repository;

pub use category::{Category, CategoryId, CategoryProps, CreateCategory};
pub use repository::{CategoryInMemoryRepository, CategoryRepository};
