//! Error taxonomy for a client run.
//!
//! Server-reported `error` messages are not represented here: they are printed
//! and the receive loop carries on.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to connect: {0}")]
    Connect(#[source] tungstenite::Error),

    #[error("websocket error: {0}")]
    Transport(#[source] tungstenite::Error),

    #[error("connection closed before game_over")]
    Closed,

    #[error("malformed server message {raw:?}: {source}")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
