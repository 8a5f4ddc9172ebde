#![forbid(unsafe_code)]

//! Journal entries and the views built from them.
//!
//! - [`entry`] - the entry model delivered by the remote API
//! - [`feed`] - reading and ordering an entries payload
//! - [`timeline`] - one gradient-styled row per entry
//! - [`profile`] - mood frequencies across a user's entries

pub mod entry;
pub mod feed;
pub mod profile;
pub mod timeline;

pub use entry::JournalEntry;
pub use feed::{JournalError, Order, load_entries, parse_entries, read_entries, sort_entries};
pub use profile::{MoodCount, MoodProfile};
pub use timeline::{TimelineRow, render_row, render_timeline};
