//! Domain model shared by the store and the HTTP layer.
//! - `Recipe` and `Source` are the persisted entities.
//! - `ids` parses the 24-hex-character document identifiers.
//! - `errors` holds the closed set of domain error kinds.

pub mod db;
pub mod entity;
pub mod errors;
pub mod ids;
pub mod recipe;
pub mod source;

pub use entity::{Entity, EntityKind};
pub use errors::DomainError;
pub use ids::{parse_id, ObjectId};
pub use recipe::Recipe;
pub use source::{Source, SourceType};
