//! Error types for the Policy Store subsystem

use shared_types::HostError;
use thiserror::Error;

/// Errors raised while saving or restoring the store.
///
/// Queries and toggles never fail; only the persistence boundary does.
#[derive(Debug, Error)]
pub enum PolicyStoreError {
    #[error("Persisted store could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Host persistence facility failed: {0}")]
    Host(#[from] HostError),
}
