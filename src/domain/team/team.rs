use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{TeamError, TeamResult};
use crate::domain::player::Player;

/// Team aggregate root
///
/// A user-created grouping that owns an ordered list of player snapshots.
/// Enforces all business rules related to team details and roster moves.
///
/// # Invariants
/// - Name is at least 3 characters
/// - Region and country are at least 2 characters
/// - A player id appears at most once in the roster
/// - The displayed player count is always the roster length; `declared_count`
///   is a user-entered capacity that roster moves never touch
///
/// # Example
/// ```
/// use courtside_api::domain::team::Team;
///
/// let team = Team::new("Dream Team", 12, "West", "USA").expect("valid team");
///
/// assert_eq!(team.name(), "Dream Team");
/// assert_eq!(team.player_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    name: String,
    declared_count: u32,
    region: String,
    country: String,
    created_at: DateTime<Utc>,
    players: Vec<Player>,
}

impl Team {
    /// Creates a new Team with an empty roster
    ///
    /// # Arguments
    /// * `name` - Display name (at least 3 characters)
    /// * `declared_count` - User-entered player capacity
    /// * `region` - Region name (at least 2 characters)
    /// * `country` - Country name (at least 2 characters)
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a generated id and empty roster
    /// * `Err(TeamError)` - If any field constraint is violated
    pub fn new(
        name: impl Into<String>,
        declared_count: u32,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> TeamResult<Self> {
        let name = name.into();
        let region = region.into();
        let country = country.into();
        Self::validate_details(&name, &region, &country)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            declared_count,
            region,
            country,
            created_at: Utc::now(),
            players: Vec::new(),
        })
    }

    /// Replaces the team's editable details, keeping id, roster, and creation time
    ///
    /// # Returns
    /// * `Ok(())` - Details replaced
    /// * `Err(TeamError)` - If any field constraint is violated; the team is unchanged
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        declared_count: u32,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> TeamResult<()> {
        let name = name.into();
        let region = region.into();
        let country = country.into();
        Self::validate_details(&name, &region, &country)?;

        self.name = name;
        self.declared_count = declared_count;
        self.region = region;
        self.country = country;
        Ok(())
    }

    /// Validates the field constraints shared by creation and update
    fn validate_details(name: &str, region: &str, country: &str) -> TeamResult<()> {
        if name.chars().count() < 3 {
            return Err(TeamError::NameTooShort);
        }
        if region.chars().count() < 2 {
            return Err(TeamError::RegionTooShort);
        }
        if country.chars().count() < 2 {
            return Err(TeamError::CountryTooShort);
        }
        Ok(())
    }

    /// Appends a player snapshot to the roster
    ///
    /// # Returns
    /// * `Ok(())` - Player added
    /// * `Err(TeamError::PlayerAlreadyAssigned)` - If the id is already in this roster
    pub fn add_player(&mut self, player: Player) -> TeamResult<()> {
        if self.has_player(&player.id) {
            return Err(TeamError::PlayerAlreadyAssigned(player.id));
        }
        self.players.push(player);
        Ok(())
    }

    /// Removes a player from the roster by id and returns the snapshot
    ///
    /// # Returns
    /// * `Ok(Player)` - The removed snapshot
    /// * `Err(TeamError::PlayerNotInRoster)` - If the id is not in this roster
    pub fn remove_player(&mut self, player_id: &str) -> TeamResult<Player> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TeamError::PlayerNotInRoster(player_id.to_string()))?;
        Ok(self.players.remove(index))
    }

    /// Returns true if the given player id is in this roster
    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    // ===== Getters =====

    /// Returns the team's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user-entered player capacity
    pub fn declared_count(&self) -> u32 {
        self.declared_count
    }

    /// Returns the region name
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the country name
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the roster in assignment order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of players actually in the roster
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
