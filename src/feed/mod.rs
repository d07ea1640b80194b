// Player feed module
// Incrementally pulls directory pages into an accumulated roster view

pub mod consumer;
pub mod errors;
pub mod source;

pub use consumer::PlayerFeed;
pub use errors::{FeedError, FeedResult};
pub use source::{PlayerPage, PlayerSource};
