//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities, ordered by ID
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace every field of an existing entity.
    /// Updating a missing ID is not an error.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
