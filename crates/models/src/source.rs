use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::errors::DomainError;
use crate::ids::{self, ObjectId};

/// Allowed values for `Source::source_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Book,
    Url,
    Custom,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::Book, SourceType::Url, SourceType::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Book => "book",
            SourceType::Url => "url",
            SourceType::Custom => "custom",
        }
    }

    /// Exact, case-sensitive match against the allowed values.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| DomainError::SourceTypeNotValid { source_type: value.to_string() })
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a recipe comes from. `source_type` is kept as the raw string so
/// updates store whatever the client sent; only creation checks it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub source_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Source {
    pub fn draft(title: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self { id: ids::unassigned(), source_type: source_type.into(), title: title.into() }
    }
}

impl Entity for Source {
    const KIND: EntityKind = EntityKind::Source;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }

    fn validate_new(&self) -> Result<(), DomainError> {
        SourceType::parse(&self.source_type).map(|_| ())
    }
}
