use async_trait::async_trait;

use super::StoreError;
use crate::domain::team::Team;

/// Storage port for the team collection
///
/// The directory logic never touches a concrete backend: it loads the full
/// collection once at startup and writes the full collection back after every
/// mutation. Implementations decide where the bytes live (a JSON file by
/// default; a database or remote store would slot in here without touching
/// the partition logic).
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Load the entire persisted team collection; absent storage loads as empty
    async fn load(&self) -> Result<Vec<Team>, StoreError>;

    /// Persist the entire team collection, replacing what was there
    async fn save(&self, teams: &[Team]) -> Result<(), StoreError>;
}
