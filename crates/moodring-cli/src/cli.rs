#![forbid(unsafe_code)]

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "moodring", version)]
#[command(about = "Journal entries rendered in their mood colors")]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render each entry with the gradient that blends it into its neighbors
    Timeline {
        /// Entries JSON file; `-` or omitted reads stdin
        #[arg(env = "MOODRING_ENTRIES")]
        file: Option<PathBuf>,

        /// List the oldest entry first
        #[arg(long)]
        oldest_first: bool,

        /// Render only the row at this position, counted after ordering
        #[arg(long)]
        index: Option<usize>,
    },

    /// Resolve a mood field such as "happy, sad" to its colors
    Colors {
        /// Comma-separated moods; an empty string means neutral
        field: String,
    },

    /// List every mood with its colors and glyph
    Legend,

    /// Summarize how often each mood appears
    Profile {
        /// Entries JSON file; `-` or omitted reads stdin
        #[arg(env = "MOODRING_ENTRIES")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_timeline_flags() {
        let cli = Cli::try_parse_from([
            "moodring",
            "timeline",
            "entries.json",
            "--oldest-first",
            "--index",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::Timeline {
                file,
                oldest_first,
                index,
            } => {
                assert_eq!(file, Some(PathBuf::from("entries.json")));
                assert!(oldest_first);
                assert_eq!(index, Some(2));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["moodring", "legend", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_directive(), "debug");
    }

    #[test]
    fn colors_requires_field() {
        assert!(Cli::try_parse_from(["moodring", "colors"]).is_err());
        let cli = Cli::try_parse_from(["moodring", "colors", ""]).unwrap();
        assert!(matches!(cli.command, Command::Colors { field } if field.is_empty()));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["moodring", "--format", "yaml", "legend"]).is_err());
    }
}
