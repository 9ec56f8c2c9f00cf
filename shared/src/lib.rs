//! Wire types and small parsing helpers shared by Tiger/Dragon clients.

pub mod discards;
pub mod legal;
pub mod messages;
pub mod player;

pub use discards::{compare_discard_keys, DiscardPiles};
pub use legal::parse_legal;
pub use messages::{ClientMsg, GameOver, JoinAck, RoundResult, ServerMsg, StatePrompt};
pub use player::{Role, Winner};
