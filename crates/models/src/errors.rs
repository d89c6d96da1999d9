use thiserror::Error;

use crate::entity::EntityKind;

/// Domain error kinds. Callers match on the variant, never on the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{kind} with id '{id}' not found")]
    EntityNotFound { kind: EntityKind, id: String },
    #[error("{kind} id '{id}' not valid")]
    IdentifierNotValid { kind: EntityKind, id: String },
    #[error("source type '{source_type}' not valid")]
    SourceTypeNotValid { source_type: String },
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::EntityNotFound { kind, id: id.into() }
    }

    pub fn invalid_id(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::IdentifierNotValid { kind, id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity_and_payload() {
        assert_eq!(
            DomainError::not_found(EntityKind::Recipe, "abc").to_string(),
            "recipe with id 'abc' not found"
        );
        assert_eq!(
            DomainError::invalid_id(EntityKind::Source, "xyz").to_string(),
            "source id 'xyz' not valid"
        );
        let e = DomainError::SourceTypeNotValid { source_type: "magazine".into() };
        assert_eq!(e.to_string(), "source type 'magazine' not valid");
    }
}
