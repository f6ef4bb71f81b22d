use async_trait::async_trait;
use tracing::debug;

use repokit_core::Entity;
use repokit_core::repository::{
    Repository, RepositoryResult, SearchParams, SearchResult, SearchableRepository,
};

use super::filter::FilterStrategy;
use super::repository::InMemoryRepository;
use super::sort::SortableFields;

/// In-memory repository with the filter → sort → paginate search pipeline.
///
/// Filtering is delegated to an injected [`FilterStrategy`]; sorting uses the
/// declared [`SortableFields`]. Plain CRUD goes to the wrapped
/// [`InMemoryRepository`].
pub struct InMemorySearchableRepository<E, F = String> {
    store: InMemoryRepository<E>,
    filter: Box<dyn FilterStrategy<E, F>>,
    sortable: SortableFields<E>,
}

impl<E, F> InMemorySearchableRepository<E, F>
where
    E: Entity + Clone,
{
    pub fn new(filter: impl FilterStrategy<E, F> + 'static, sortable: SortableFields<E>) -> Self {
        Self {
            store: InMemoryRepository::new(),
            filter: Box::new(filter),
            sortable,
        }
    }

    /// The underlying entity store.
    pub fn store(&self) -> &InMemoryRepository<E> {
        &self.store
    }

    fn apply_filter(&self, items: Vec<E>, filter: Option<&F>) -> Vec<E> {
        self.filter.apply(items, filter)
    }
}

/// Contiguous `[start, start + per_page)` slice for a 1-based page.
///
/// Pages past the end yield an empty vector.
pub fn paginate<E>(items: Vec<E>, page: usize, per_page: usize) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

impl<E, F> core::fmt::Debug for InMemorySearchableRepository<E, F>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemorySearchableRepository")
            .field("store", &self.store)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E, F> Repository<E> for InMemorySearchableRepository<E, F>
where
    E: Entity + Clone + Send + Sync + 'static,
    F: Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        self.store.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        self.store.bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        self.store.update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        self.store.delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        self.store.find_all().await
    }
}

#[async_trait]
impl<E, F> SearchableRepository<E, F> for InMemorySearchableRepository<E, F>
where
    E: Entity + Clone + Send + Sync + 'static,
    F: Send + Sync + 'static,
{
    fn sortable_fields(&self) -> Vec<&'static str> {
        self.sortable.names()
    }

    async fn search(&self, params: SearchParams<F>) -> RepositoryResult<SearchResult<E>> {
        let filtered = self.apply_filter(self.store.snapshot()?, params.filter());
        let total = filtered.len();

        let sorted = self.sortable.sort(
            filtered,
            params.sort(),
            params.sort_dir().unwrap_or_default(),
        );
        let items = paginate(sorted, params.page(), params.per_page());

        debug!(
            entity = E::entity_name(),
            total,
            page = params.page(),
            per_page = params.per_page(),
            returned = items.len(),
            "search"
        );
        Ok(SearchResult::new(items, total, params.page(), params.per_page()))
    }
}
