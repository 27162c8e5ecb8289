// wordveil/src/commands/scan.rs
//! Scan command implementation: reports keyword occurrences without
//! rewriting the input.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use wordveil_core::{engine::FilterEngine, MaskSummaryItem};

use super::info_msg;
use crate::ui::summary;

/// Options for the scan runner.
pub struct ScanOptions {
    pub input: Vec<u8>,
    pub fail_over_threshold: Option<usize>,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub sample_matches: Option<usize>,
    pub quiet: bool,
}

/// Runs a scan over the input and reports per-keyword statistics.
pub fn run_scan_opts(engine: &dyn FilterEngine, opts: ScanOptions) -> Result<()> {
    info!("Starting scan operation.");

    // Analysis runs on the raw bytes so the report always agrees with
    // what a filter pass over the same input would mask.
    let summary_items = engine
        .analyze_bytes_for_stats(&opts.input, "cli-scan")
        .context("Scan failed")?;

    let total_matches: usize = summary_items.iter().map(|item| item.occurrences).sum();
    debug!(
        "Scan complete. {} keywords matched, {} total occurrences.",
        summary_items.len(),
        total_matches
    );

    if opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_json_report(&summary_items, total_matches, &mut writer)?;
    } else if let Some(path) = &opts.json_file {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create JSON report file: {}", path.display()))?;
        write_json_report(&summary_items, total_matches, &mut file)?;
        info_msg(format!("Scan report written to: {}", path.display()));
    }

    if !opts.quiet && !opts.json_stdout {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_scan_summary(
            &summary_items,
            &mut io::stderr(),
            stderr_supports_color,
            opts.sample_matches,
        )?;
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if total_matches > threshold {
            bail!(
                "FAIL-OVER triggered: Found {} keyword matches, which exceeds the specified threshold of {}.",
                total_matches,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(())
}

/// Writes the machine-readable scan report.
///
/// Keywords are emitted in sorted order so reports are stable across runs.
fn write_json_report(
    summary_items: &[MaskSummaryItem],
    total_matches: usize,
    writer: &mut dyn Write,
) -> Result<()> {
    let scan_summary: BTreeMap<&str, usize> = summary_items
        .iter()
        .map(|item| (item.keyword.as_str(), item.occurrences))
        .collect();

    let report = serde_json::json!({
        "scan_summary": scan_summary,
        "total_matches": total_matches,
    });

    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to serialize scan report")?;
    writeln!(writer)?;
    Ok(())
}
