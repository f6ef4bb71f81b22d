//! Storage-agnostic repository contracts.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::RepositoryResult;
use super::search_params::SearchParams;
use super::search_result::SearchResult;
use crate::entity::Entity;

/// CRUD access to the entities of one type.
///
/// ## Identity semantics
///
/// Stored entities are matched by [`Entity::entity_id`] equality, never by
/// reference or by other attributes.
///
/// ## Failure semantics
///
/// - `update` and `delete` fail with
///   [`RepositoryError::NotFound`](super::RepositoryError::NotFound) when no
///   stored entity has the given identity.
/// - `find_by_id` reports absence as `Ok(None)`.
/// - Errors from collaborators are returned unchanged.
///
/// ## Implementation requirements
///
/// - `insert` / `bulk_insert` append; no uniqueness check beyond what the
///   backend enforces. `bulk_insert` keeps input order and need not be atomic.
/// - `update` replaces the whole stored entity, keeping its position.
/// - `delete` keeps the relative order of the remaining entities.
/// - `find_all` returns entities in storage order (insertion order in memory).
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()>;

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()>;

    async fn update(&self, entity: E) -> RepositoryResult<()>;

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>>;

    async fn find_all(&self) -> RepositoryResult<Vec<E>>;
}

/// Repository that also supports filter / sort / paginate queries.
///
/// `search` runs the pipeline filter → sort → paginate:
///
/// 1. keep the entities matching `params.filter()` (everything when absent)
/// 2. order them by `params.sort()` when it is one of
///    [`sortable_fields`](SearchableRepository::sortable_fields); otherwise keep
///    the filtered order
/// 3. slice out `params.page()`
///
/// `total` in the result is the size of step 1's output. Any normalized
/// [`SearchParams`] is a valid query: searching an empty store yields an empty
/// page, and pages past the end are empty rather than errors.
#[async_trait]
pub trait SearchableRepository<E, F = String>: Repository<E>
where
    E: Entity + Send + Sync + 'static,
    F: Send + Sync + 'static,
{
    /// Field names `search` is able to sort by.
    fn sortable_fields(&self) -> Vec<&'static str>;

    async fn search(&self, params: SearchParams<F>) -> RepositoryResult<SearchResult<E>>;
}

#[async_trait]
impl<E, R> Repository<E> for Arc<R>
where
    E: Entity + Send + Sync + 'static,
    R: Repository<E> + ?Sized,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        (**self).insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        (**self).bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        (**self).delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        (**self).find_all().await
    }
}

#[async_trait]
impl<E, F, R> SearchableRepository<E, F> for Arc<R>
where
    E: Entity + Send + Sync + 'static,
    F: Send + Sync + 'static,
    R: SearchableRepository<E, F> + ?Sized,
{
    fn sortable_fields(&self) -> Vec<&'static str> {
        (**self).sortable_fields()
    }

    async fn search(&self, params: SearchParams<F>) -> RepositoryResult<SearchResult<E>> {
        (**self).search(params).await
    }
}
