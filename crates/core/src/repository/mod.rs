//! Repository contracts and the search value types they exchange.
//!
//! - [`Repository`]: insert, bulk insert, update, delete, find by id, find all
//! - [`SearchableRepository`]: adds [`search`](SearchableRepository::search)
//! - [`SearchParams`]: normalized query input (page, per page, sort, filter)
//! - [`SearchResult`]: one page of results plus pagination metadata
//!
//! Storage backends live outside this crate; the in-memory reference
//! implementation is in `repokit-infra`.

mod error;
mod search_params;
mod search_result;
mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use search_params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchParams, SearchParamsBuilder, SearchProps, SortDirection,
};
pub use search_result::SearchResult;
pub use traits::{Repository, SearchableRepository};
