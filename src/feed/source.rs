use async_trait::async_trait;
use serde::Deserialize;

use super::errors::FeedResult;
use crate::domain::player::Player;

/// One page of the upstream directory's `{ data, meta }` envelope.
///
/// Only the rows matter to consumers; the meta block is dropped at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPage {
    pub data: Vec<Player>,
}

/// A paged source of player records
///
/// The feed and the available-players view read through this port so tests
/// can script upstream pages and failures.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Fetch one page of players
    async fn fetch_page(
        &self,
        search: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> FeedResult<PlayerPage>;
}
