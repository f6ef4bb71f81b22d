//! In-memory reference repositories.
//!
//! These implement the `repokit-core` contracts over an ordered `Vec` and
//! define the externally observable search behaviour (filter, then sort, then
//! paginate) that storage-backed implementations must reproduce.

pub mod filter;
pub mod repository;
pub mod searchable;
pub mod sort;

pub use filter::{FilterStrategy, TextFilter};
pub use repository::InMemoryRepository;
pub use searchable::{InMemorySearchableRepository, paginate};
pub use sort::{SortValue, SortableFields};
