#![forbid(unsafe_code)]

//! Loading and ordering the entries payload.
//!
//! The remote API answers `GET /entries` with a JSON array of entries. The
//! same array, saved to disk or piped on stdin, is what this module reads.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entry::JournalEntry;

/// Failure to obtain a list of entries.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed entries payload")]
    Json(#[from] serde_json::Error),
}

/// Display order of a timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Most recent entry at the top, as the journal list shows it.
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Parse an entries payload held in memory.
pub fn parse_entries(json: &str) -> Result<Vec<JournalEntry>, JournalError> {
    let entries: Vec<JournalEntry> = serde_json::from_str(json)?;
    tracing::debug!(count = entries.len(), "parsed entries payload");
    Ok(entries)
}

/// Parse an entries payload from any reader.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<JournalEntry>, JournalError> {
    let entries: Vec<JournalEntry> = serde_json::from_reader(reader)?;
    tracing::debug!(count = entries.len(), "read entries payload");
    Ok(entries)
}

/// Read and parse an entries file.
pub fn load_entries(path: &Path) -> Result<Vec<JournalEntry>, JournalError> {
    let file = File::open(path).map_err(|source| JournalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let _span = tracing::debug_span!("load_entries", path = %path.display()).entered();
    read_entries(BufReader::new(file))
}

/// Sort by creation time, ties broken by id so equal timestamps stay stable.
pub fn sort_entries(entries: &mut [JournalEntry], order: Order) {
    entries.sort_by(|a, b| {
        let oldest_first = a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id));
        match order {
            Order::OldestFirst => oldest_first,
            Order::NewestFirst => oldest_first.reverse(),
        }
    });
}
