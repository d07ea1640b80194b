use thiserror::Error;

/// Errors surfaced by a feed load
///
/// Rate limiting gets its own variant because the caller shows it with a
/// distinct warning and leaves the retry to the user; every other failure
/// collapses into one generic fetch error. Neither variant changes the
/// feed's exhaustion state.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Failed to fetch players. Please try again later.")]
    Fetch(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
