use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use repokit_core::Entity;
use repokit_core::ValueObject;
use repokit_core::repository::{Repository, RepositoryError, RepositoryResult};

/// In-memory, insertion-ordered entity store.
///
/// Intended for tests/dev. Entities are matched by identity equality; reads
/// return clones, so changes to a returned entity only reach the store through
/// [`Repository::update`].
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }
}

impl<E> InMemoryRepository<E>
where
    E: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection (kept in the given order).
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Clone of the whole collection in storage order.
    pub fn snapshot(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<E>>> {
        self.entities
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.entities
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))
    }

    fn index_of(entities: &[E], id: &E::Id) -> RepositoryResult<usize> {
        entities
            .iter()
            .position(|e| e.entity_id().equals(Some(id)))
            .ok_or_else(|| {
                debug!(entity = E::entity_name(), %id, "entity not found");
                RepositoryError::not_found(E::entity_name(), id)
            })
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        debug!(entity = E::entity_name(), id = %entity.entity_id(), "insert");
        self.write()?.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        debug!(entity = E::entity_name(), count = entities.len(), "bulk insert");
        self.write()?.extend(entities);
        Ok(())
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        let mut entities = self.write()?;
        let index = Self::index_of(&entities, entity.entity_id())?;
        debug!(entity = E::entity_name(), id = %entity.entity_id(), index, "update");
        entities[index] = entity;
        Ok(())
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        let mut entities = self.write()?;
        let index = Self::index_of(&entities, id)?;
        debug!(entity = E::entity_name(), %id, index, "delete");
        entities.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        Ok(self
            .read()?
            .iter()
            .find(|e| e.entity_id().equals(Some(id)))
            .cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        self.snapshot()
    }
}
