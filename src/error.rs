//! Error types for note storage and export.

use thiserror::Error;

use crate::store::BackendError;

/// Everything that can go wrong inside the library.
///
/// Read-side variants (`Read`, `Corrupted`) are swallowed by the best-effort
/// queries; write-side variants always reach the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read notes: {0}")]
    Read(#[source] BackendError),

    #[error("stored notes are corrupted: {0}")]
    Corrupted(#[source] serde_json::Error),

    #[error("failed to persist notes: {0}")]
    Persistence(#[source] BackendError),

    #[error("failed to encode notes: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write export: {0}")]
    Export(#[from] std::io::Error),

    #[error("share failed: {0}")]
    Share(String),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
