use std::time::Duration;

use models::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("store operation did not finish within {0:?}")]
    Timeout(Duration),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn db(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Db(format!("error while executing {context}: {err}"))
    }

    /// True for the two lookup failures the HTTP layer reports as 404.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            ServiceError::Domain(DomainError::EntityNotFound { .. })
                | ServiceError::Domain(DomainError::IdentifierNotValid { .. })
        )
    }
}
