// wordveil/src/commands/filter.rs
//! Filter command implementation: rewrites input with the mask token.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use wordveil_core::{engine::FilterEngine, MaskSummaryItem};

use super::info_msg;
use crate::ui::diff_viewer;
use crate::ui::summary;

/// Options for the ergonomic run_filter_opts API.
pub struct FilterOptions {
    pub input: Vec<u8>,
    pub diff: bool,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main one-shot filter runner.
///
/// Filtering happens at the byte level so malformed UTF-8 in the input
/// survives to the output unchanged, and the rewritten bytes are written
/// verbatim: the output framing mirrors the input framing.
pub fn run_filter_opts(engine: &dyn FilterEngine, opts: FilterOptions) -> Result<()> {
    info!("Starting filter operation.");

    let (filtered_content, summary_items) = engine
        .filter_bytes(&opts.input, "cli-input")
        .context("Filtering failed")?;

    debug!(
        "Content filtered. Original length: {}, Filtered length: {}",
        opts.input.len(),
        filtered_content.len()
    );

    handle_primary_output(&opts, &filtered_content)?;
    handle_mask_summary(&summary_items, &opts)?;

    info!("Filter operation completed.");
    Ok(())
}

/// Streaming variant for `--line-buffered`: reads input line by line,
/// filters each chunk independently, and flushes after every line.
///
/// Each chunk is written back verbatim, newline included, so the output
/// framing always mirrors the input framing.
pub fn run_filter_lines(
    engine: &dyn FilterEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<()> {
    info!("Starting line-buffered filter operation.");

    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        let (filtered, _) = engine.filter_bytes(&line, "cli-stream")?;
        writer.write_all(&filtered)?;
        writer.flush()?;
    }

    info!("Line-buffered filter operation completed.");
    Ok(())
}

/// Reads the full input for one-shot modes: a file when `-i` was given,
/// stdin otherwise.
pub fn read_input(input_file: &Option<PathBuf>) -> Result<Vec<u8>> {
    match input_file {
        Some(path) => {
            info_msg(format!("Reading input from file: {}", path.display()));
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn handle_primary_output(opts: &FilterOptions, filtered_content: &[u8]) -> Result<()> {
    if let Some(path) = opts.output_path.clone() {
        info_msg(format!("Writing filtered content to file: {}", path.display()));
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        if opts.diff {
            print_diff_lossy(&opts.input, filtered_content, &mut file, false)?;
        } else {
            file.write_all(filtered_content)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();

        if opts.diff {
            print_diff_lossy(&opts.input, filtered_content, &mut writer, supports_color)?;
        } else {
            writer.write_all(filtered_content)?;
        }
    }
    Ok(())
}

/// Diff rendering works on text; undecodable bytes are shown lossily.
/// The actual filter output path stays byte-exact.
fn print_diff_lossy(
    original: &[u8],
    filtered: &[u8],
    writer: &mut dyn Write,
    colored: bool,
) -> Result<()> {
    let original = String::from_utf8_lossy(original);
    let filtered = String::from_utf8_lossy(filtered);
    diff_viewer::print_diff(&original, &filtered, writer, colored)
}

fn handle_mask_summary(summary_items: &[MaskSummaryItem], opts: &FilterOptions) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(summary_items, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wordveil_core::{FilterConfig, TrieEngine};

    fn engine(keywords: &[&str]) -> TrieEngine {
        TrieEngine::new(FilterConfig {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..FilterConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn line_buffered_filters_each_line_and_preserves_framing() {
        let engine = engine(&["abc"]);
        let mut reader = Cursor::new(b"say abc\nclean line\na-b-c".to_vec());
        let mut output = Vec::new();
        run_filter_lines(&engine, &mut reader, &mut output).unwrap();
        assert_eq!(output, b"say ***\nclean line\n***");
    }

    #[test]
    fn line_buffered_passes_malformed_bytes_through() {
        let engine = engine(&["abc"]);
        let mut reader = Cursor::new(b"abc \xF0\x28 abc\n".to_vec());
        let mut output = Vec::new();
        run_filter_lines(&engine, &mut reader, &mut output).unwrap();
        assert_eq!(output, b"*** \xF0\x28 ***\n");
    }
}
