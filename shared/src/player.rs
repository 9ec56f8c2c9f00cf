//! Player-related identifiers for the Tiger/Dragon protocol.

use serde::{Deserialize, Serialize};

/// Role requested when joining a room.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Player,
    Spectator,
}

/// Winner reported by the server.
///
/// Sent either as the winning seat number or as a player id string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Winner {
    Seat(i64),
    Name(String),
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Seat(seat) => write!(f, "{}", seat),
            Winner::Name(name) => write!(f, "{}", name),
        }
    }
}
