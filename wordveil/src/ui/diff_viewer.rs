// wordveil/src/ui/diff_viewer.rs
//! Unified diff output for the `--diff` flag: highlights exactly which
//! lines the mask rewrite removed (red) and added (green).

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::Write;

pub fn print_diff(
    original: &str,
    filtered: &str,
    writer: &mut dyn Write,
    colored: bool,
) -> Result<()> {
    let patch = create_patch(original, filtered);

    writeln!(writer, "--- Diff Analysis ---")?;

    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changes += 1;
                    let line = format!("- {}", s.trim_end_matches('\n'));
                    if colored {
                        writeln!(writer, "{}", line.red())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changes += 1;
                    let line = format!("+ {}", s.trim_end_matches('\n'));
                    if colored {
                        writeln!(writer, "{}", line.green())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }

    Ok(())
}
