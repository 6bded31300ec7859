//! Lyrics cleanup and slide pagination.
//!
//! The export service renders one title slide per song followed by one
//! slide per lyrics paragraph. [`paginate`] reproduces that split so a
//! deck can be previewed before it is generated.

use crate::service::ExportEntry;

/// Leading markers stripped from each line
const BULLETS: [char; 7] = ['•', '●', '■', '□', '○', '-', '*'];

/// Tidy scraped lyrics.
///
/// - `_x000D_` artifacts become line breaks
/// - leading bullet markers are removed
/// - repeat markers like `×2` are removed
/// - runs of three or more dots are removed
/// - blank lines are dropped and the result trimmed
pub fn clean_lyrics(text: &str) -> String {
    let text = text.replace("_x000D_", "\n");

    text.lines()
        .map(|line| {
            let line = strip_bullet(line);
            let line = strip_repeat_marks(line);
            strip_ellipses(&line)
        })
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(BULLETS) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Remove `×N` together with the spaces around it.
fn strip_repeat_marks(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find('×') {
        let after = &rest[pos + '×'.len_utf8()..];
        let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            out.push_str(&rest[..pos + '×'.len_utf8()]);
            rest = after;
            continue;
        }
        out.push_str(rest[..pos].trim_end_matches([' ', '\t']));
        rest = after[digits..].trim_start_matches([' ', '\t']);
    }
    out.push_str(rest);
    out
}

fn strip_ellipses(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut dots = 0;
    for c in line.chars() {
        if c == '.' {
            dots += 1;
            continue;
        }
        if (1..3).contains(&dots) {
            out.push_str(&".".repeat(dots));
        }
        dots = 0;
        out.push(c);
    }
    if (1..3).contains(&dots) {
        out.push_str(&".".repeat(dots));
    }
    out
}

/// One slide of a previewed deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Title(String),
    Lyrics(String),
}

/// Split lyrics into paragraphs on runs of two or more line breaks.
///
/// A line holding only spaces is not a break.
pub fn paragraphs(lyrics: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut rest = lyrics.trim();

    while !rest.is_empty() {
        let (paragraph, tail) = match rest.find("\n\n") {
            Some(pos) => (&rest[..pos], rest[pos..].trim_start_matches('\n')),
            None => (rest, ""),
        };
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            paragraphs.push(paragraph.to_string());
        }
        rest = tail;
    }
    paragraphs
}

/// Slides the export service would render for `entries`, in order.
pub fn paginate(entries: &[ExportEntry]) -> Vec<Slide> {
    entries
        .iter()
        .flat_map(|entry| {
            std::iter::once(Slide::Title(entry.title.clone()))
                .chain(paragraphs(&entry.lyrics).into_iter().map(Slide::Lyrics))
        })
        .collect()
}
