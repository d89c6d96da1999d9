//! Document identifiers: 12-byte ObjectIds rendered as 24 hex characters.

pub use mongodb::bson::oid::ObjectId;

use crate::entity::EntityKind;
use crate::errors::DomainError;

/// Parse a path or body identifier, reporting it against the given entity kind.
pub fn parse_id(kind: EntityKind, id: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id).map_err(|_| DomainError::invalid_id(kind, id))
}

/// Placeholder carried by entities that have not been stored yet.
pub fn unassigned() -> ObjectId {
    ObjectId::from_bytes([0; 12])
}
