//! Phrase sampling from plain text sources.
//!
//! Stands in for scraping visible page text: every line of the source is one
//! candidate fragment.

use std::io::{self, Read};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// Cap on sampled phrases when nothing else is configured.
pub const DEFAULT_MAX_PHRASES: usize = 300;

/// Fragments with this many characters or fewer are noise.
const MIN_PHRASE_CHARS: usize = 2;

/// Trim, drop short fragments, deduplicate keeping the first occurrence, and
/// cap at `max_items`.
pub fn sample_phrases<I, S>(fragments: I, max_items: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| s.chars().count() > MIN_PHRASE_CHARS)
        .unique()
        .take(max_items)
        .collect()
}

/// Sample phrases from `input`, or from stdin when no path is given.
#[instrument(level = "debug")]
pub fn read_phrases(input: Option<&Path>, max_items: usize) -> ApplicationResult<Vec<String>> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path).with_path_context("read phrases", path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ApplicationError::Io {
                    context: "read phrases from stdin".into(),
                    source,
                })?;
            buf
        }
    };
    let phrases = sample_phrases(content.lines(), max_items);
    debug!(count = phrases.len(), "Sampled phrases");
    Ok(phrases)
}
