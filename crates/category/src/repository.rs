use async_trait::async_trait;
use tracing::debug;

use repokit_core::repository::{
    Repository, RepositoryResult, SearchParams, SearchResult, SearchableRepository, SortDirection,
};
use repokit_infra::in_memory::{InMemorySearchableRepository, SortableFields, TextFilter};

use crate::category::{Category, CategoryId};

/// Field used when a search names no sort.
pub const DEFAULT_SORT_FIELD: &str = "created_at";

/// Storage contract for categories, searched by a name filter.
pub trait CategoryRepository: SearchableRepository<Category, String> {}

/// In-memory categories, newest first unless the search names a sort.
#[derive(Debug)]
pub struct CategoryInMemoryRepository {
    inner: InMemorySearchableRepository<Category>,
}

impl CategoryInMemoryRepository {
    pub fn new() -> Self {
        let filter = TextFilter::new().field(Category::name);
        let sortable = SortableFields::new()
            .field("name", |c: &Category| c.name().into())
            .field("created_at", |c: &Category| c.created_at().into());
        Self {
            inner: InMemorySearchableRepository::new(filter, sortable),
        }
    }
}

impl Default for CategoryInMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Category> for CategoryInMemoryRepository {
    async fn insert(&self, entity: Category) -> RepositoryResult<()> {
        self.inner.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<Category>) -> RepositoryResult<()> {
        self.inner.bulk_insert(entities).await
    }

    async fn update(&self, entity: Category) -> RepositoryResult<()> {
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &CategoryId) -> RepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        self.inner.find_all().await
    }
}

#[async_trait]
impl SearchableRepository<Category> for CategoryInMemoryRepository {
    fn sortable_fields(&self) -> Vec<&'static str> {
        self.inner.sortable_fields()
    }

    async fn search(&self, params: SearchParams) -> RepositoryResult<SearchResult<Category>> {
        let params = match params.sort() {
            Some(_) => params,
            None => {
                debug!(field = DEFAULT_SORT_FIELD, "applying default category sort");
                params.with_sort(DEFAULT_SORT_FIELD, SortDirection::Desc)
            }
        };
        self.inner.search(params).await
    }
}

impl CategoryRepository for CategoryInMemoryRepository {}
