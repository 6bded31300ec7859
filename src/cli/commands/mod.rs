//! CLI command definitions and dispatch.
//!
//! Each subcommand lives in its own submodule:
//! - `search`: look up lyrics and print them, or preview the slides
//! - `build`: run a whole session through to an exported deck
//! - `config`: show or initialize the config file

mod build;
mod config;
mod search;

use clap::{Parser, Subcommand};
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::controller::SearchController;
use crate::error::Result;
use crate::service::LookupClient;
use crate::session::{Session, SessionEvent, SharedSession};
use crate::setlist::Setlist;

pub use build::cmd_build;
pub use config::cmd_config;
pub use search::{cmd_preview, cmd_search};

/// Lyric Deck CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the lyrics service (overrides the config file)
    #[arg(long, global = true, env = "LYRIC_DECK_URL")]
    pub url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Songs to work on, from a setlist file and/or the command line
#[derive(clap::Args, Debug, Clone)]
pub struct SongArgs {
    /// Song titles to look up
    pub titles: Vec<String>,

    /// Setlist TOML file with songs, renames, lyrics and order
    #[arg(short, long)]
    pub setlist: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up lyrics and print the results
    Search {
        #[command(flatten)]
        songs: SongArgs,
        /// Print the full lyrics of every song
        #[arg(short, long)]
        lyrics: bool,
    },
    /// Look up lyrics and export the ordered set as a slide deck
    Build {
        #[command(flatten)]
        songs: SongArgs,
        /// Final song order (repeat the flag; overrides the setlist order)
        #[arg(long = "order", value_name = "TITLE")]
        order: Vec<String>,
        /// Where to save the deck (file or directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Download the deck when the service only returns its location
        #[arg(long)]
        fetch: bool,
    },
    /// Show how the lyrics will be split into slides
    Preview {
        #[command(flatten)]
        songs: SongArgs,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };
    if let Some(url) = &cli.url {
        config.service.base_url = url.clone();
    }

    match &cli.command {
        Commands::Config { init } => cmd_config(&config, cli.config.as_deref(), *init)?,
        Commands::Search { songs, lyrics } => {
            let rt = Runtime::new()?;
            cmd_search(&rt, &config, songs, *lyrics)?
        }
        Commands::Preview { songs } => {
            let rt = Runtime::new()?;
            cmd_preview(&rt, &config, songs)?
        }
        Commands::Build {
            songs,
            order,
            output,
            fetch,
        } => {
            let rt = Runtime::new()?;
            cmd_build(&rt, &config, songs, order, output.as_deref(), *fetch)?
        }
    }
    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// A session filled from the command line, plus its event feed.
pub(crate) struct Prepared {
    pub session: SharedSession,
    pub setlist: Option<Setlist>,
    pub events: Receiver<SessionEvent>,
}

/// Create a session and queue the requested songs.
///
/// Setlist songs are queued first, then command-line titles.
pub(crate) fn prepare_session(
    config: &crate::config::Config,
    songs: &SongArgs,
) -> Result<Prepared> {
    let (tx, events) = crossbeam_channel::unbounded();
    let mut session = Session::with_events(tx).with_placeholder(config.lyrics.placeholder.clone());

    let setlist = match &songs.setlist {
        Some(path) => Some(Setlist::load(path)?),
        None => None,
    };
    if let Some(setlist) = &setlist {
        setlist.queue_into(&mut session);
    }
    for title in &songs.titles {
        session.add_song(title);
    }

    Ok(Prepared {
        session: session.shared(),
        setlist,
        events,
    })
}

/// Run the lookup and apply setlist edits.
///
/// Failures are reported through the session events, then returned so the
/// process exits non-zero.
pub(crate) fn run_search(
    rt: &Runtime,
    config: &crate::config::Config,
    prepared: &Prepared,
) -> Result<()> {
    let queued = prepared.session.lock().queue().len();
    println!("Looking up {} song(s)...", queued);

    let controller = SearchController::new(LookupClient::new(config)?);
    let result = rt.block_on(controller.search(&prepared.session));
    report_events(&prepared.events);
    let summary = result?;

    for title in &summary.missing {
        println!("  ✗ No lyrics found for {:?}", title);
    }

    if let Some(setlist) = &prepared.setlist {
        let report = setlist.apply_edits(&mut prepared.session.lock());
        if report.renamed + report.lyrics_set > 0 || report.reordered {
            println!(
                "Applied setlist: {} rename(s), {} lyrics edit(s){}",
                report.renamed,
                report.lyrics_set,
                if report.reordered { ", custom order" } else { "" }
            );
        }
        for skipped in &report.skipped {
            println!("  ✗ Could not rename {:?} to {:?}", skipped.from, skipped.to);
        }
    }
    Ok(())
}

/// Print user-facing failure messages the session reported.
pub(crate) fn report_events(events: &Receiver<SessionEvent>) {
    for event in events.try_iter() {
        match event {
            SessionEvent::SearchFailed(msg) | SessionEvent::ExportFailed(msg) => {
                eprintln!("Error: {}", msg);
            }
            other => tracing::debug!(?other, "Session event"),
        }
    }
}
