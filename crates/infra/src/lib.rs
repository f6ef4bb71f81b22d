//! Infrastructure layer: repository implementations.

pub mod in_memory;

pub use in_memory::{
    FilterStrategy, InMemoryRepository, InMemorySearchableRepository, SortValue, SortableFields,
    TextFilter,
};
