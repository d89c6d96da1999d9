use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{parse_id, DomainError, Entity, ObjectId};

use crate::deadline::Deadline;
use crate::errors::ServiceError;
use crate::repository::EntityStore;

/// `EntityStore` fake holding records in insertion order.
///
/// Mirrors the document store's semantics, including the optional artificial
/// latency used to exercise deadlines.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    latency: Option<Duration>,
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())), latency: None }
    }

    /// Every operation sleeps for `latency` before touching the data.
    pub fn with_latency(latency: Duration) -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())), latency: Some(latency) }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn list_all(&self, deadline: &Deadline) -> Result<Vec<T>, ServiceError> {
        deadline
            .run(async {
                self.simulate_latency().await;
                Ok(self.inner.read().await.clone())
            })
            .await
    }

    async fn get_by_id(&self, deadline: &Deadline, id: &str) -> Result<T, ServiceError> {
        let object_id = parse_id(T::KIND, id)?;
        deadline
            .run(async {
                self.simulate_latency().await;
                let items = self.inner.read().await;
                items
                    .iter()
                    .find(|e| e.id() == object_id)
                    .cloned()
                    .ok_or_else(|| ServiceError::from(DomainError::not_found(T::KIND, id)))
            })
            .await
    }

    async fn add(&self, deadline: &Deadline, mut entity: T) -> Result<T, ServiceError> {
        entity.validate_new()?;
        entity.set_id(ObjectId::new());
        deadline
            .run(async {
                self.simulate_latency().await;
                self.inner.write().await.push(entity.clone());
                Ok(())
            })
            .await?;
        Ok(entity)
    }

    async fn update(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError> {
        deadline
            .run(async {
                self.simulate_latency().await;
                let mut items = self.inner.write().await;
                let slot = items
                    .iter_mut()
                    .find(|e| e.id() == entity.id())
                    .ok_or_else(|| DomainError::not_found(T::KIND, entity.id().to_hex()))?;
                *slot = entity.clone();
                Ok::<_, ServiceError>(())
            })
            .await
    }

    async fn delete(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError> {
        deadline
            .run(async {
                self.simulate_latency().await;
                self.inner.write().await.retain(|e| e.id() != entity.id());
                Ok(())
            })
            .await
    }
}
