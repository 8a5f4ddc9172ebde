#![forbid(unsafe_code)]

//! Command execution and text/JSON rendering.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use moodring_journal::entry::timestamp;
use moodring_journal::{
    JournalEntry, MoodProfile, Order, TimelineRow, load_entries, read_entries, render_row,
    render_timeline, sort_entries,
};
use moodring_style::{LegendEntry, MoodLabel, MoodList, Rgb, TEXT_COLOR, legend, parse_moods};
use serde::Serialize;

use crate::cli::{Cli, Command, Format};

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Timeline {
            file,
            oldest_first,
            index,
        } => {
            let mut entries = load(file.as_deref())?;
            let order = if *oldest_first {
                Order::OldestFirst
            } else {
                Order::NewestFirst
            };
            sort_entries(&mut entries, order);
            let rows = match index {
                Some(index) => vec![
                    render_row(&entries, *index)
                        .with_context(|| format!("cannot render timeline row {index}"))?,
                ],
                None => render_timeline(&entries),
            };
            write_timeline(out, &rows, cli.format)
        }
        Command::Colors { field } => write_colors(out, &ColorsReport::new(field), cli.format),
        Command::Legend => write_legend(out, &legend(), cli.format),
        Command::Profile { file } => {
            let entries = load(file.as_deref())?;
            write_profile(out, &MoodProfile::from_entries(&entries), cli.format)
        }
    }
}

fn load(file: Option<&Path>) -> Result<Vec<JournalEntry>> {
    match file {
        Some(path) if path != Path::new("-") => {
            load_entries(path).context("could not load journal entries")
        }
        _ => {
            tracing::info!("reading entries from stdin");
            read_entries(io::stdin().lock()).context("could not read journal entries from stdin")
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_timeline<W: Write>(out: &mut W, rows: &[TimelineRow], format: Format) -> Result<()> {
    if format == Format::Json {
        return write_json(out, rows);
    }
    if rows.is_empty() {
        writeln!(out, "no entries")?;
        return Ok(());
    }
    for row in rows {
        writeln!(
            out,
            "#{} {} {}  ({})  {}",
            row.id,
            row.glyph,
            row.title,
            row.moods,
            timestamp::format(&row.created_at)?
        )?;
        writeln!(out, "    {}", row.css)?;
    }
    Ok(())
}

/// Everything `colors` reports about one mood field.
#[derive(Debug, Serialize)]
struct ColorsReport {
    moods: MoodList,
    dominant: MoodLabel,
    glyph: &'static str,
    primary: Rgb,
    secondary: Rgb,
    gradient: String,
    text_color: Rgb,
}

impl ColorsReport {
    fn new(field: &str) -> Self {
        let moods = parse_moods(Some(field));
        let colors = moods.resolve();
        Self {
            dominant: moods.dominant(),
            glyph: colors.glyph,
            primary: colors.primary,
            secondary: colors.secondary,
            gradient: colors.gradient().to_string(),
            text_color: TEXT_COLOR,
            moods,
        }
    }
}

fn write_colors<W: Write>(out: &mut W, report: &ColorsReport, format: Format) -> Result<()> {
    if format == Format::Json {
        return write_json(out, report);
    }
    writeln!(out, "moods      {}", report.moods)?;
    writeln!(out, "dominant   {} {}", report.dominant, report.glyph)?;
    writeln!(out, "primary    {}", report.primary)?;
    writeln!(out, "secondary  {}", report.secondary)?;
    writeln!(out, "gradient   {}", report.gradient)?;
    Ok(())
}

fn write_legend<W: Write>(out: &mut W, entries: &[LegendEntry], format: Format) -> Result<()> {
    if format == Format::Json {
        return write_json(out, entries);
    }
    for entry in entries {
        writeln!(
            out,
            "{} {:<9} {} {}",
            entry.glyph,
            entry.mood.name(),
            entry.primary,
            entry.secondary
        )?;
    }
    Ok(())
}

fn write_profile<W: Write>(out: &mut W, profile: &MoodProfile, format: Format) -> Result<()> {
    if format == Format::Json {
        return write_json(out, profile);
    }
    let secondary = profile.secondary_mood.map_or("-", MoodLabel::name);
    writeln!(out, "entries    {}", profile.entry_count)?;
    writeln!(out, "dominant   {} {}", profile.dominant_mood, profile.dominant_mood.glyph())?;
    writeln!(out, "secondary  {secondary}")?;
    writeln!(out, "combined   {} {}", profile.combined_mood, profile.colors.glyph)?;
    for count in &profile.tally {
        writeln!(out, "  {:<9} {}", count.mood.name(), count.count)?;
    }
    writeln!(out, "gradient   {}", profile.gradient)?;
    Ok(())
}
