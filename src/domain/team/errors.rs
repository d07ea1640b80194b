use thiserror::Error;
use uuid::Uuid;

/// Errors from team creation, editing, and roster moves
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamError {
    #[error("Name must be at least 3 characters")]
    NameTooShort,

    #[error("Region must be at least 2 characters")]
    RegionTooShort,

    #[error("Country must be at least 2 characters")]
    CountryTooShort,

    #[error("Team with this name already exists")]
    DuplicateName,

    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Player {0} is already assigned to a team")]
    PlayerAlreadyAssigned(String),

    #[error("Player {0} is not in this team's roster")]
    PlayerNotInRoster(String),
}

pub type TeamResult<T> = Result<T, TeamError>;
