//! Lyrics lookup and slide preview commands.

use tokio::runtime::Runtime;

use super::{SongArgs, prepare_session, run_search};
use crate::config::Config;
use crate::controller::build_payload;
use crate::deck::{self, Slide};
use crate::error::Result;

/// Look up lyrics and print the results in order
pub fn cmd_search(rt: &Runtime, config: &Config, songs: &SongArgs, lyrics: bool) -> Result<()> {
    let prepared = prepare_session(config, songs)?;
    run_search(rt, config, &prepared)?;

    let rows = prepared.session.lock().rows();
    println!();
    for (i, row) in rows.iter().enumerate() {
        match &row.url {
            Some(url) => println!("{:>2}. {}  <{}>", i + 1, row.title, url),
            None => println!("{:>2}. {}", i + 1, row.title),
        }
        if lyrics {
            for line in row.lyrics.lines() {
                println!("      {}", line);
            }
            println!();
        }
    }
    Ok(())
}

/// Look up lyrics and print the slides an export would produce
pub fn cmd_preview(rt: &Runtime, config: &Config, songs: &SongArgs) -> Result<()> {
    let prepared = prepare_session(config, songs)?;
    run_search(rt, config, &prepared)?;

    let payload = {
        let session = prepared.session.lock();
        build_payload(
            session.order().snapshot(),
            session.store(),
            &config.lyrics.placeholder,
        )
    };

    let slides = deck::paginate(&payload.entries);
    println!();
    for (i, slide) in slides.iter().enumerate() {
        match slide {
            Slide::Title(title) => {
                println!("── Slide {} [title] ──", i + 1);
                println!("  {}", title);
            }
            Slide::Lyrics(text) => {
                println!("── Slide {} ──", i + 1);
                for line in text.lines() {
                    println!("  {}", line);
                }
            }
        }
    }
    println!();
    println!(
        "{} song(s), {} slide(s)",
        payload.entries.len(),
        slides.len()
    );
    Ok(())
}
