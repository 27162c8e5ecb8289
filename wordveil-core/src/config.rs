//! Configuration management for `wordveil-core`.
//!
//! This module defines the keyword dictionary configuration used by the
//! filter engines. It handles serialization/deserialization of YAML
//! configurations, loading of plain wordlist files, and utilities for
//! merging and validating dictionaries.

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub use wordveil_automaton::scanner::DEFAULT_MASK;

/// Maximum allowed keyword length, in code points.
pub const MAX_KEYWORD_LENGTH: usize = 64;

/// The top-level configuration for a filter engine: the keyword
/// dictionary plus the mask token emitted for every match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Forbidden phrases, matched exact-substring and case-sensitive.
    pub keywords: Vec<String>,
    /// Replacement emitted per match regardless of keyword length.
    pub mask: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            mask: DEFAULT_MASK.to_string(),
        }
    }
}

impl FilterConfig {
    /// Loads a keyword configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading keyword config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_keywords(&config.keywords)?;
        info!(
            "Loaded {} keywords from file {}.",
            config.keywords.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the default keyword dictionary from the embedded configuration.
    pub fn load_default_keywords() -> Result<Self> {
        debug!("Loading default keywords from embedded string...");
        let default_yaml = include_str!("../config/default_keywords.yaml");
        let config: FilterConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default keywords")?;

        debug!("Loaded {} default keywords.", config.keywords.len());
        Ok(config)
    }

    /// Loads a plain-text wordlist: one keyword per line, trimmed, blank
    /// lines skipped. The resulting config carries the default mask.
    pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading wordlist from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read wordlist file {}", path.display()))?;

        let keywords = parse_wordlist(&text);
        validate_keywords(&keywords)?;
        info!(
            "Loaded {} keywords from wordlist {}.",
            keywords.len(),
            path.display()
        );

        Ok(Self {
            keywords,
            ..Self::default()
        })
    }

    /// Appends keywords, skipping entries already present.
    pub fn extend_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.keywords.iter().cloned().collect();
        for keyword in keywords {
            let keyword = keyword.into();
            if seen.insert(keyword.clone()) {
                self.keywords.push(keyword);
            }
        }
    }
}

/// Parses wordlist text into keywords: trim each line, skip blanks.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merges a user-supplied configuration over the defaults.
///
/// User keywords are unioned with the default dictionary (duplicates
/// collapse); the user's mask wins.
pub fn merge_configs(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    debug!(
        "merge_configs called. Initial default keyword count: {}",
        default_config.keywords.len()
    );

    let mut merged = default_config;
    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user keywords.", user_cfg.keywords.len());
        merged.extend_keywords(user_cfg.keywords);
        merged.mask = user_cfg.mask;
    }

    debug!("Final total keywords after merge: {}", merged.keywords.len());
    merged
}

/// Validates dictionary integrity (length bounds, duplicates, blanks).
///
/// Blank and duplicate entries only warn; the automaton builder skips and
/// deduplicates them. Over-long keywords are a hard error.
pub fn validate_keywords(keywords: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for keyword in keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            warn!("A keyword entry is blank and will be ignored.");
            continue;
        }
        if !seen.insert(trimmed) {
            warn!("Duplicate keyword entry found: '{}'.", trimmed);
        }

        let length = trimmed.chars().count();
        if length > MAX_KEYWORD_LENGTH {
            errors.push(format!(
                "Keyword '{}…': length ({}) exceeds maximum allowed ({}).",
                trimmed.chars().take(8).collect::<String>(),
                length,
                MAX_KEYWORD_LENGTH
            ));
        }
    }

    if !errors.is_empty() {
        Err(anyhow!(format!(
            "Keyword validation failed:\n{}",
            errors.join("\n")
        )))
    } else {
        Ok(())
    }
}
