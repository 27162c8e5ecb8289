// wordveil/src/ui/summary.rs
//! Renders per-keyword match summaries as a table, with optional unique
//! sample display for the `scan` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::io::Write;

use wordveil_core::{canonical_sample_hash, MaskSummaryItem};

/// Prints the post-filter mask summary.
pub fn print_summary(
    items: &[MaskSummaryItem],
    writer: &mut dyn Write,
    colored: bool,
) -> Result<()> {
    print_titled_summary("Keyword Mask Summary", items, writer, colored, None)
}

/// Prints the scan summary, optionally with up to `sample_limit` unique
/// sample matches per keyword.
pub fn print_scan_summary(
    items: &[MaskSummaryItem],
    writer: &mut dyn Write,
    colored: bool,
    sample_limit: Option<usize>,
) -> Result<()> {
    print_titled_summary("Keyword Scan Summary", items, writer, colored, sample_limit)
}

fn print_titled_summary(
    title: &str,
    items: &[MaskSummaryItem],
    writer: &mut dyn Write,
    colored: bool,
    sample_limit: Option<usize>,
) -> Result<()> {
    if items.is_empty() {
        writeln!(writer, "No keyword matches found.")?;
        return Ok(());
    }

    if colored {
        writeln!(writer, "\n{}", title.bold())?;
    } else {
        writeln!(writer, "\n{}", title)?;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Keyword", "Occurrences"]);
    for item in items {
        table.add_row(vec![item.keyword.clone(), item.occurrences.to_string()]);
    }
    writeln!(writer, "{table}")?;

    if let Some(limit) = sample_limit {
        for item in items {
            let samples = unique_samples(item, limit);
            if samples.is_empty() {
                continue;
            }
            writeln!(writer, "Samples for '{}':", item.keyword)?;
            for sample in samples {
                writeln!(writer, "  - {}", sample)?;
            }
        }
    }

    Ok(())
}

/// Dedupes a keyword's matched texts by canonical sample hash, keeping
/// first-seen order, capped at `limit`.
fn unique_samples(item: &MaskSummaryItem, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut samples = Vec::new();
    for original in &item.original_texts {
        if samples.len() >= limit {
            break;
        }
        let hash = canonical_sample_hash(&item.keyword, original);
        if seen.insert(hash) {
            samples.push(original.clone());
        }
    }
    samples
}
