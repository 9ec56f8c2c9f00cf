//! Random-move player: joins a room and answers every turn prompt with a
//! uniformly random legal choice until the server announces the winner.
//!
//! Decision making ([`RandomPlayer::handle`]) is kept separate from the socket
//! loop ([`RandomPlayer::play`]) so it can be exercised without a server.

use std::io::{Stdout, Write};

use futures_util::{Sink, SinkExt, Stream};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tokio_tungstenite::tungstenite::{self, Message};

use tigerdragon_shared::{
    ClientMsg, DiscardPiles, GameOver, Role, ServerMsg, StatePrompt, Winner,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::printer::Printer;
use crate::transport;

/// What the receive loop should do after one server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Send these messages, in order, then wait for the next frame.
    Reply(Vec<ClientMsg>),
    /// `game_over` received; stop without sending anything else.
    Finished(Outcome),
}

/// Summary of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Option<Winner>,
    pub scores: Option<String>,
    pub actions_sent: usize,
}

pub struct RandomPlayer<W: Write = Stdout, R: Rng = StdRng> {
    room_id: String,
    player_id: String,
    reveal_discards: bool,
    show_discards: bool,
    printer: Printer<W>,
    rng: R,
    actions_sent: usize,
}

/// Seeded generator when a seed is configured, OS entropy otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl<W: Write, R: Rng> RandomPlayer<W, R> {
    pub fn new(config: &ClientConfig, printer: Printer<W>, rng: R) -> Self {
        Self {
            room_id: config.room_id.clone(),
            player_id: config.player_id.clone(),
            reveal_discards: config.reveal_discards,
            show_discards: config.show_discards,
            printer,
            rng,
            actions_sent: 0,
        }
    }

    pub fn join_msg(&self) -> ClientMsg {
        ClientMsg::Join {
            room_id: self.room_id.clone(),
            player_id: self.player_id.clone(),
            role: Role::Player,
        }
    }

    pub fn actions_sent(&self) -> usize {
        self.actions_sent
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    /// React to one decoded server message.
    pub fn handle(&mut self, msg: ServerMsg) -> Result<Step> {
        match msg {
            ServerMsg::State(state) => Ok(Step::Reply(self.on_state(&state))),
            ServerMsg::Discards(fields) => {
                if self.show_discards {
                    self.printer.discards(&DiscardPiles::from_fields(&fields))?;
                }
                Ok(Step::Reply(Vec::new()))
            }
            ServerMsg::GameOver(GameOver { winner, scores }) => {
                self.printer.game_over(winner.as_ref())?;
                tracing::info!(
                    winner = %winner.as_ref().map(Winner::to_string).unwrap_or_default(),
                    scores = scores.as_deref().unwrap_or(""),
                    actions = self.actions_sent,
                    "game over"
                );
                Ok(Step::Finished(Outcome {
                    winner,
                    scores,
                    actions_sent: self.actions_sent,
                }))
            }
            ServerMsg::Error { message } => {
                let message = message.unwrap_or_default();
                tracing::warn!(%message, "server reported an error");
                self.printer.server_error(&message)?;
                Ok(Step::Reply(Vec::new()))
            }
            ServerMsg::JoinAck(ack) => {
                tracing::info!(
                    room = ack.room_id.as_deref().unwrap_or(&self.room_id),
                    seat = ack.seat,
                    players = ack.players,
                    "joined"
                );
                Ok(Step::Reply(Vec::new()))
            }
            ServerMsg::RoundResult(result) => {
                tracing::info!(
                    round = result.round,
                    winner = %result.winner.as_ref().map(Winner::to_string).unwrap_or_default(),
                    last_tile = result.last_tile.as_deref().unwrap_or(""),
                    points = result.round_points,
                    scores = result.scores.as_deref().unwrap_or(""),
                    "round finished"
                );
                Ok(Step::Reply(Vec::new()))
            }
            ServerMsg::Unknown => {
                tracing::debug!("ignoring message of unknown type");
                Ok(Step::Reply(Vec::new()))
            }
        }
    }

    fn on_state(&mut self, state: &StatePrompt) -> Vec<ClientMsg> {
        let legal = state.legal_choices();
        let Some(choice) = legal.choose(&mut self.rng).cloned() else {
            return Vec::new();
        };
        tracing::debug!(turn = state.turn, ?legal, %choice, "picked move");

        let mut replies = Vec::with_capacity(2);
        if self.reveal_discards {
            replies.push(ClientMsg::DiscardsRequest {
                room_id: self.room_id.clone(),
            });
        }
        replies.push(ClientMsg::Action {
            room_id: self.room_id.clone(),
            player_id: self.player_id.clone(),
            choice,
        });
        self.actions_sent += 1;
        replies
    }

    /// Join the room over an open socket and play until `game_over`.
    ///
    /// Any transport failure, early close, or undecodable frame ends the run
    /// with an error. On success a close frame is sent before returning.
    pub async fn play<S>(&mut self, ws: &mut S) -> Result<Outcome>
    where
        S: Stream<Item = std::result::Result<Message, tungstenite::Error>>
            + Sink<Message, Error = tungstenite::Error>
            + Unpin,
    {
        self.printer.joining(&self.room_id, &self.player_id)?;
        transport::send_msg(ws, &self.join_msg()).await?;

        loop {
            let msg = transport::next_msg(ws).await?;
            tracing::debug!(kind = msg.kind(), "received");
            match self.handle(msg)? {
                Step::Reply(replies) => {
                    for reply in &replies {
                        transport::send_msg(ws, reply).await?;
                    }
                }
                Step::Finished(outcome) => {
                    if let Err(e) = ws.close().await {
                        tracing::debug!(error = %e, "close after game_over failed");
                    }
                    return Ok(outcome);
                }
            }
        }
    }
}

/// Connect to `endpoint`, join `room_id` as `player_id` and play one game,
/// printing the trace to stdout.
pub async fn run(endpoint: &str, player_id: &str, room_id: &str) -> Result<Outcome> {
    run_with(&ClientConfig::new(endpoint, room_id, player_id)).await
}

pub async fn run_with(config: &ClientConfig) -> Result<Outcome> {
    let endpoint = config
        .endpoint
        .as_deref()
        .ok_or_else(|| ClientError::InvalidEndpoint {
            endpoint: String::new(),
            reason: "no endpoint given on the command line or in the config file".into(),
        })?;
    let url = transport::build_ws_url(endpoint)?;
    let mut ws = transport::connect(&url).await?;
    tracing::info!(%url, room = %config.room_id, player = %config.player_id, "connected");

    let mut player = RandomPlayer::new(config, Printer::stdout(), rng_for(config.seed));
    player.play(&mut ws).await
}
