//! Client-server messaging protocol for Tiger/Dragon rooms.
//!
//! Every frame is one JSON object whose `type` field selects the variant.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::legal::parse_legal;
use crate::player::{Role, Winner};

/// Messages that clients send to the server
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Join {
        room_id: String,
        player_id: String,
        role: Role,
    },
    Action {
        room_id: String,
        player_id: String,
        choice: String,
    },
    /// Ask the server to reveal every player's discard pile.
    DiscardsRequest { room_id: String },
}

/// Messages that the server sends to clients
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    State(StatePrompt),
    Discards(BTreeMap<String, Value>),
    GameOver(GameOver),
    Error {
        #[serde(default, deserialize_with = "lenient")]
        message: Option<String>,
    },
    JoinAck(JoinAck),
    RoundResult(RoundResult),
    /// Any `type` this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ServerMsg {
    /// Wire name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMsg::State(_) => "state",
            ServerMsg::Discards(_) => "discards",
            ServerMsg::GameOver(_) => "game_over",
            ServerMsg::Error { .. } => "error",
            ServerMsg::JoinAck(_) => "join_ack",
            ServerMsg::RoundResult(_) => "round_result",
            ServerMsg::Unknown => "unknown",
        }
    }
}

/// Decode an informational field, treating a value of the wrong shape like a
/// missing one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Turn prompt broadcast after every state change.
///
/// Only `legal` drives the client; it is empty unless it is this seat's turn.
/// The list-valued fields are comma-separated strings on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatePrompt {
    #[serde(default)]
    pub legal: String,
    #[serde(default, deserialize_with = "lenient")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub turn: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub phase: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_player: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub attack_tile: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hand: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hand_sizes: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bonus_discards: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub scores: Option<String>,
}

impl StatePrompt {
    pub fn legal_choices(&self) -> Vec<String> {
        parse_legal(&self.legal)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOver {
    #[serde(default, deserialize_with = "lenient")]
    pub winner: Option<Winner>,
    #[serde(default, deserialize_with = "lenient")]
    pub scores: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinAck {
    #[serde(default, deserialize_with = "lenient")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub player_id: Option<String>,
    /// Zero-based seat, `-1` for spectators.
    #[serde(default, deserialize_with = "lenient")]
    pub seat: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub players: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    #[serde(default, deserialize_with = "lenient")]
    pub winner: Option<Winner>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_tile: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bonus_discards: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub round_points: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub winner_hand: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub winner_discards: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub scores: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub round: Option<i64>,
}
