use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // stores an entity under a freshly assigned id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // replaces the entity stored under id
    async fn update(&self, id: i64, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity, None when absent
    async fn get(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // delete an entity and hand it back
    async fn delete(&self, id: i64) -> LibraryResult<Entity>;

    // all entities ordered by id
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
    SeededMemory,
}
