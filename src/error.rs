use validator::ValidationErrors;

use crate::{auth::error::AuthError, storage::error::StorageError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Storage error")]
    Storage(StorageError),

    #[error("Auth error")]
    Auth(AuthError),

    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("Record not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(anyhow::Error),
}

impl From<StorageError> for Error {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
