// Player records sourced from the external directory
// Read-only snapshots: never created or mutated here, only copied into rosters

use serde::{Deserialize, Deserializer, Serialize};

/// The franchise a player currently belongs to upstream (display name only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    pub full_name: String,
}

/// A player snapshot as served by the external directory.
///
/// The directory owns these records; this application only copies them into
/// team rosters. The upstream identifier is numeric but is normalized to its
/// decimal string form so rosters and storage always compare ids as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height_feet: Option<u8>,
    #[serde(default)]
    pub height_inches: Option<u8>,
    #[serde(default)]
    pub team: Option<Affiliation>,
}

impl Player {
    /// Returns the display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the height label, `F'I"` when both parts are present.
    pub fn height_label(&self) -> String {
        match (self.height_feet, self.height_inches) {
            (Some(feet), Some(inches)) => format!("{}'{}\"", feet, inches),
            _ => "N/A".to_string(),
        }
    }

    /// Returns the upstream franchise name, if any.
    pub fn affiliation_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.full_name.as_str())
    }
}

// The directory sends ids as JSON numbers; stored snapshots round-trip as strings.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
