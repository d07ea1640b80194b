use super::errors::FeedResult;
use super::source::PlayerSource;
use crate::domain::player::Player;

/// Page size requested on every feed load.
pub const FEED_PAGE_SIZE: u32 = 20;

/// Hard ceiling on accumulated players; exhausts the feed regardless of
/// what the upstream still has.
pub const FEED_CAPACITY: usize = 200;

/// Pagination consumer over a player source
///
/// Three flags drive the whole machine: `loading` (a fetch is in flight),
/// `has_more` (the source may still have rows), and `page` (the next page to
/// request). A load is issued only when not loading and `has_more` holds;
/// a call arriving while loading is dropped, not queued. Success appends the
/// page and advances; an empty page or hitting [`FEED_CAPACITY`] clears
/// `has_more`. Failure resets `loading` so the caller may retry, and leaves
/// `has_more` and the accumulated players untouched.
#[derive(Debug)]
pub struct PlayerFeed {
    players: Vec<Player>,
    page: u32,
    loading: bool,
    has_more: bool,
}

impl PlayerFeed {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            page: 1,
            loading: false,
            has_more: true,
        }
    }

    /// Pulls the next page from the source into the accumulated list
    ///
    /// # Returns
    /// * `Ok(count)` - Number of players appended; 0 when the load was
    ///   skipped (already loading or exhausted) or the page was empty
    /// * `Err(FeedError)` - The fetch failed; the feed state allows a retry
    pub async fn load_more<S>(&mut self, source: &S) -> FeedResult<usize>
    where
        S: PlayerSource + ?Sized,
    {
        if self.loading || !self.has_more {
            return Ok(0);
        }

        self.loading = true;
        let result = source.fetch_page(None, self.page, FEED_PAGE_SIZE).await;
        self.loading = false;

        let page = result?;
        let fetched = page.data.len();
        self.players.extend(page.data);
        self.has_more = fetched > 0 && self.players.len() < FEED_CAPACITY;
        self.page += 1;
        Ok(fetched)
    }

    /// Returns the players accumulated so far, in fetch order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the next page that a load would request
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns true while a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns false once the source is exhausted or the ceiling was hit
    pub fn has_more(&self) -> bool {
        self.has_more
    }
}

impl Default for PlayerFeed {
    fn default() -> Self {
        Self::new()
    }
}
