//! Server bootstrap errors.

use thiserror::Error;

use crate::domain::RepositoryError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage is not ready: {0}")]
    StorageNotReady(#[from] RepositoryError),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
