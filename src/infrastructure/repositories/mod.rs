// Storage adapters (data access layer)
// JSON-file implementations of the domain storage ports

pub mod json_session_store;
pub mod json_team_store;

pub use json_session_store::JsonFileSessionStore;
pub use json_team_store::JsonFileTeamStore;
