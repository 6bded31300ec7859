//! Command-line interface for lyric-deck.
//!
//! Drives a session from the terminal: queue songs, look up lyrics, apply
//! setlist edits and export the deck.

mod commands;

pub use commands::{Cli, run_command};
