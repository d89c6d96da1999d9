use std::sync::Arc;

use async_trait::async_trait;
use models::{Entity, Recipe, Source};

use crate::deadline::Deadline;
use crate::errors::ServiceError;

/// Persistence port for one entity kind, one document collection per kind.
///
/// Every call is bounded by the caller's `Deadline`.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All stored entities; an empty collection yields an empty vector.
    async fn list_all(&self, deadline: &Deadline) -> Result<Vec<T>, ServiceError>;

    /// Fails with `IdentifierNotValid` for malformed ids and `EntityNotFound` for misses.
    async fn get_by_id(&self, deadline: &Deadline, id: &str) -> Result<T, ServiceError>;

    /// Validates the new entity, assigns a fresh id (replacing any the caller set)
    /// and returns the stored entity.
    async fn add(&self, deadline: &Deadline, entity: T) -> Result<T, ServiceError>;

    /// Replaces the stored record with the same id. Fails with `EntityNotFound`
    /// when no record matches.
    async fn update(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError>;

    /// Removes the record with the entity's id; removing a missing record is a no-op.
    async fn delete(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError>;
}

pub type RecipeStore = Arc<dyn EntityStore<Recipe>>;
pub type SourceStore = Arc<dyn EntityStore<Source>>;
