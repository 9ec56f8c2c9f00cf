use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::PlayerCli;

pub const DEFAULT_ROOM_ID: &str = "room1";
pub const DEFAULT_PLAYER_ID: &str = "p1";

/// Client settings, optionally read from a TOML file.
///
/// Fields:
/// - endpoint: server URL; must come from here or the command line
/// - room_id / player_id: identity used in every outbound message
/// - reveal_discards: send `discards_request` before each action
/// - show_discards: print the revealed discard piles
/// - seed: fixed seed for reproducible move picks
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub room_id: String,
    pub player_id: String,
    pub reveal_discards: bool,
    pub show_discards: bool,
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: None,
            room_id: DEFAULT_ROOM_ID.to_string(),
            player_id: DEFAULT_PLAYER_ID.to_string(),
            reveal_discards: false,
            show_discards: false,
            seed: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: &str, room_id: &str, player_id: &str) -> Self {
        ClientConfig {
            endpoint: Some(endpoint.to_string()),
            room_id: room_id.to_string(),
            player_id: player_id.to_string(),
            ..Default::default()
        }
    }

    /// Load configuration from `path`. A missing file is an error; nothing is
    /// written back.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        let cfg: ClientConfig = toml::from_str(&s)
            .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Load the file named by `--config` (if any) and apply the remaining
    /// command-line values on top of it.
    pub fn from_cli(cli: &PlayerCli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Command-line values take precedence; flags can only switch features on.
    pub fn with_overrides(mut self, cli: &PlayerCli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        if let Some(room_id) = &cli.room_id {
            self.room_id = room_id.clone();
        }
        if let Some(player_id) = &cli.player_id {
            self.player_id = player_id.clone();
        }
        self.reveal_discards |= cli.reveal_discards;
        self.show_discards |= cli.show_discards;
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }
}
