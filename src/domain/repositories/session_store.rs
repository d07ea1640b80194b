use async_trait::async_trait;

use super::StoreError;

/// Storage port for the guest session
///
/// Holds at most one plain username string.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored username, if a session exists
    async fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the username, replacing any existing session
    async fn save(&self, username: &str) -> Result<(), StoreError>;

    /// Drop the stored session, if any
    async fn clear(&self) -> Result<(), StoreError>;
}
