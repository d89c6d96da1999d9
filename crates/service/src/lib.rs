//! Entity store layer.
//! - `repository::EntityStore` is the persistence port used by the HTTP handlers.
//! - `db::MongoStore` backs it with a MongoDB collection; `storage::InMemoryStore` with a vector.
//! - Every operation is bounded by a caller-supplied `deadline::Deadline`.

pub mod db;
pub mod deadline;
pub mod errors;
pub mod repository;
pub mod storage;

pub use deadline::Deadline;
pub use errors::ServiceError;
pub use repository::{EntityStore, RecipeStore, SourceStore};
