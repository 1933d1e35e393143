use abi::ReservationError;
use async_trait::async_trait;
use parking_lot::RwLock;

use super::{AddRepository, Entity, Repository};

/// Vector-backed store for tests and demos.
///
/// It does not guard the no-overlap invariant; use it with a single writer.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    inner: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = entities.into_iter().collect();
        items.sort_by_key(Entity::id);
        Self {
            inner: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    async fn get_all(&self) -> Result<Vec<T>, ReservationError> {
        Ok(self.inner.read().clone())
    }
}

#[async_trait]
impl<T> AddRepository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    async fn add(&self, mut entity: T) -> Result<T, ReservationError> {
        let mut items = self.inner.write();
        if entity.id() == 0 {
            let next = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
            entity.set_id(next);
        }

        match items.binary_search_by_key(&entity.id(), Entity::id) {
            Ok(_) => Err(ReservationError::DuplicateId(entity.id())),
            Err(pos) => {
                items.insert(pos, entity.clone());
                Ok(entity)
            }
        }
    }
}
