// Infrastructure layer module
// Contains storage adapters and the external directory integration
// Follows Hexagonal Architecture

pub mod directory_client;
pub mod repositories;
