pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod printer;
pub mod transport;

pub use client::{run, run_with, Outcome, RandomPlayer, Step};
pub use config::ClientConfig;
pub use error::ClientError;
