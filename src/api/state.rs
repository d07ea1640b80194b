use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::repositories::{SessionStore, TeamStore};
use crate::domain::team::TeamDirectory;
use crate::feed::PlayerFeed;
use crate::infrastructure::directory_client::PlayerDirectoryClient;

/// Shared application state passed to every handler
///
/// The one place mutable state lives: the team directory and the player feed
/// sit behind async locks, and a lock is held across a mutation plus its
/// write-back so mutations serialize. Storage backends are reached only
/// through their ports.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<TeamDirectory>>,
    pub feed: Arc<Mutex<PlayerFeed>>,
    pub team_store: Arc<dyn TeamStore>,
    pub session_store: Arc<dyn SessionStore>,
    pub players: Arc<PlayerDirectoryClient>,
}

impl AppState {
    /// Assembles the state container from its parts
    pub fn new(
        directory: TeamDirectory,
        team_store: Arc<dyn TeamStore>,
        session_store: Arc<dyn SessionStore>,
        players: Arc<PlayerDirectoryClient>,
    ) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            feed: Arc::new(Mutex::new(PlayerFeed::new())),
            team_store,
            session_store,
            players,
        }
    }
}
