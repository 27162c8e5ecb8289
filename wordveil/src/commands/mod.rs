// wordveil/src/commands/mod.rs
//! Command implementations for the wordveil CLI, plus the shared
//! dictionary-assembly helper both commands use.

pub mod filter;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::path::PathBuf;

use wordveil_core::{merge_configs, FilterConfig};

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Assembles the effective keyword dictionary from the CLI arguments.
///
/// Layering order: embedded defaults (unless `--no-default-keywords`),
/// then a user YAML config merged over them, then wordlist keywords
/// appended, then an explicit `--mask` override.
pub fn build_config(
    config_path: &Option<PathBuf>,
    wordlist_path: &Option<PathBuf>,
    mask: Option<&str>,
    no_default_keywords: bool,
) -> Result<FilterConfig> {
    let base = if no_default_keywords {
        debug!("Skipping embedded default keywords.");
        FilterConfig::default()
    } else {
        FilterConfig::load_default_keywords().context("Failed to load default keywords")?
    };

    let user_config = match config_path {
        Some(path) => Some(
            FilterConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        ),
        None => None,
    };

    let mut merged = merge_configs(base, user_config);

    if let Some(path) = wordlist_path {
        let wordlist = FilterConfig::load_wordlist(path)
            .with_context(|| format!("Failed to load wordlist file: {}", path.display()))?;
        merged.extend_keywords(wordlist.keywords);
    }

    if let Some(mask) = mask {
        merged.mask = mask.to_string();
    }

    debug!("Effective dictionary size: {} keywords.", merged.keywords.len());
    Ok(merged)
}
