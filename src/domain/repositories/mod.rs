// Storage interfaces (ports) for the team collection and the guest session
// Implementations live in the infrastructure layer

pub mod session_store;
pub mod team_store;

pub use session_store::SessionStore;
pub use team_store::TeamStore;

use thiserror::Error;

/// Errors from a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
