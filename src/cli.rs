use clap::Parser;
use std::path::PathBuf;

/// CLI for the random-player client
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "random-player",
    version,
    about = "Joins a Tiger/Dragon room and plays uniformly random legal moves"
)]
pub struct PlayerCli {
    /// Server endpoint, e.g. ws://localhost:9002 (http(s):// and bare host:port are accepted)
    #[arg(required_unless_present = "config")]
    pub endpoint: Option<String>,

    /// Room to join [default: room1]
    pub room_id: Option<String>,

    /// Player identity to join as [default: p1]
    pub player_id: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Send a discards_request before every action
    #[arg(long, default_value_t = false)]
    pub reveal_discards: bool,

    /// Print the discard piles the server reveals
    #[arg(long, default_value_t = false)]
    pub show_discards: bool,

    /// Seed for the move picker (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbose logging to stderr
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let cli = PlayerCli::try_parse_from(["random-player", "ws://localhost:9002", "room7", "p3"])
            .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("ws://localhost:9002"));
        assert_eq!(cli.room_id.as_deref(), Some("room7"));
        assert_eq!(cli.player_id.as_deref(), Some("p3"));
        assert!(!cli.reveal_discards);
    }

    #[test]
    fn endpoint_only() {
        let cli = PlayerCli::try_parse_from(["random-player", "ws://localhost:9002"]).unwrap();
        assert_eq!(cli.room_id, None);
        assert_eq!(cli.player_id, None);
    }

    #[test]
    fn missing_endpoint_is_a_usage_error() {
        let err = PlayerCli::try_parse_from(["random-player"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn config_can_stand_in_for_endpoint() {
        let cli = PlayerCli::try_parse_from([
            "random-player",
            "--config",
            "player.toml",
            "--reveal-discards",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, None);
        assert_eq!(cli.config, Some(PathBuf::from("player.toml")));
        assert!(cli.reveal_discards);
        assert_eq!(cli.seed, Some(7));
    }
}
