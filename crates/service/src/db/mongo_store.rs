use async_trait::async_trait;
use mongodb::{bson::doc, Collection, Database};
use tracing::debug;

use models::{parse_id, DomainError, Entity, ObjectId};

use crate::deadline::Deadline;
use crate::errors::ServiceError;
use crate::repository::EntityStore;

/// `EntityStore` over a MongoDB collection, keyed by `_id`.
pub struct MongoStore<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> MongoStore<T> {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self { collection: db.collection::<T>(collection_name) }
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for MongoStore<T> {
    async fn list_all(&self, deadline: &Deadline) -> Result<Vec<T>, ServiceError> {
        deadline
            .run(async {
                let mut cursor = self
                    .collection
                    .find(doc! {})
                    .await
                    .map_err(|e| ServiceError::db("query", e))?;
                let mut items = Vec::new();
                while cursor.advance().await.map_err(|e| ServiceError::db("cursor iteration", e))? {
                    items.push(
                        cursor
                            .deserialize_current()
                            .map_err(|e| ServiceError::db("document decoding", e))?,
                    );
                }
                debug!(entity = %T::KIND, count = items.len(), "listed entities");
                Ok::<_, ServiceError>(items)
            })
            .await
    }

    async fn get_by_id(&self, deadline: &Deadline, id: &str) -> Result<T, ServiceError> {
        let object_id = parse_id(T::KIND, id)?;
        deadline
            .run(async {
                self.collection
                    .find_one(doc! { "_id": object_id })
                    .await
                    .map_err(|e| ServiceError::db("query", e))?
                    .ok_or_else(|| ServiceError::from(DomainError::not_found(T::KIND, id)))
            })
            .await
    }

    async fn add(&self, deadline: &Deadline, mut entity: T) -> Result<T, ServiceError> {
        entity.validate_new()?;
        entity.set_id(ObjectId::new());
        deadline
            .run(async {
                self.collection
                    .insert_one(&entity)
                    .await
                    .map_err(|e| ServiceError::db("insert", e))?;
                Ok::<_, ServiceError>(())
            })
            .await?;
        debug!(entity = %T::KIND, id = %entity.id(), "inserted entity");
        Ok(entity)
    }

    async fn update(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError> {
        let id = entity.id();
        let res = deadline
            .run(async {
                self.collection
                    .replace_one(doc! { "_id": id }, entity)
                    .await
                    .map_err(|e| ServiceError::db("update", e))
            })
            .await?;
        if res.matched_count == 0 {
            return Err(DomainError::not_found(T::KIND, id.to_hex()).into());
        }
        Ok(())
    }

    async fn delete(&self, deadline: &Deadline, entity: &T) -> Result<(), ServiceError> {
        let id = entity.id();
        let res = deadline
            .run(async {
                self.collection
                    .delete_one(doc! { "_id": id })
                    .await
                    .map_err(|e| ServiceError::db("delete", e))
            })
            .await?;
        debug!(entity = %T::KIND, id = %id, deleted = res.deleted_count, "deleted entity");
        Ok(())
    }
}
