//! Lyric Deck - turn a list of song titles into a lyrics slide deck.
//!
//! Songs are queued, their lyrics fetched from a lookup service, edited,
//! renamed and reordered, and the final set is sent to an export service
//! that generates the deck.

pub mod cli;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod service;
pub mod session;
pub mod setlist;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lyric_deck=info")))
        .init();

    cli::run_command(&args)
}
