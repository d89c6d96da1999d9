use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::ids::{self, ObjectId};

/// A stored recipe. Empty fields are left out of the stored document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Reference to a `Source`; not checked against the sources collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_annotation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
}

impl Recipe {
    /// A recipe that has not been stored yet.
    pub fn draft(
        title: impl Into<String>,
        source: Option<ObjectId>,
        source_annotation: impl Into<String>,
        category: impl Into<String>,
        allergens: Vec<String>,
    ) -> Self {
        Self {
            id: ids::unassigned(),
            title: title.into(),
            source,
            source_annotation: source_annotation.into(),
            category: category.into(),
            allergens,
        }
    }
}

impl Entity for Recipe {
    const KIND: EntityKind = EntityKind::Recipe;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }
}
