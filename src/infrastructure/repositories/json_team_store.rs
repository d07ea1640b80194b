use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::repositories::{StoreError, TeamStore};
use crate::domain::team::Team;

/// JSON-file implementation of [`TeamStore`]
///
/// The whole team collection lives in one pretty-printed JSON array; every
/// save rewrites the full file. Concurrent processes pointing at the same
/// file can overwrite each other, there is no conflict detection.
pub struct JsonFileTeamStore {
    path: PathBuf,
}

impl JsonFileTeamStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TeamStore for JsonFileTeamStore {
    async fn load(&self) -> Result<Vec<Team>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, teams: &[Team]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(teams)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
