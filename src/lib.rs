//! Courtside API Library
//!
//! This library provides the core functionality for the Courtside roster
//! service: the team/player domain logic, the paginated player feed, storage
//! ports with JSON-file adapters, and the HTTP layer.

pub mod api;
pub mod domain;
pub mod feed;
pub mod infrastructure;
