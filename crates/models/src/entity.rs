use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::DomainError;
use crate::ids::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Recipe,
    Source,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Recipe => "recipe",
            EntityKind::Source => "source",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record persisted in its own document collection, keyed by `_id`.
pub trait Entity: Clone + fmt::Debug + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    fn id(&self) -> ObjectId;

    fn set_id(&mut self, id: ObjectId);

    /// Checks applied before a new record is inserted. Updates skip this.
    fn validate_new(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
