// wordveil-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using core engines in headless mode (non-UI).
//! Provides helper functions for a full, one-shot filtering of strings and
//! byte buffers.

use anyhow::Result;

use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::engines::trie_engine::TrieEngine;

/// Fully filters an input string, masking every keyword occurrence.
/// This function is the primary entry point for non-interactive use.
///
/// # Arguments
///
/// * `config` - The merged FilterConfig (defaults + optional user overrides).
/// * `content` - The string to be filtered.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_filter_string(
    config: FilterConfig,
    content: &str,
    source_id: &str,
) -> Result<String> {
    let engine: Box<dyn FilterEngine> = Box::new(TrieEngine::new(config)?);
    let (filtered_content, _) = engine.filter(content, source_id)?;
    Ok(filtered_content)
}

/// Byte-level variant of [`headless_filter_string`]: malformed UTF-8 in
/// `content` survives unchanged in the output.
pub fn headless_filter_bytes(
    config: FilterConfig,
    content: &[u8],
    source_id: &str,
) -> Result<Vec<u8>> {
    let engine: Box<dyn FilterEngine> = Box::new(TrieEngine::new(config)?);
    let (filtered_content, _) = engine.filter_bytes(content, source_id)?;
    Ok(filtered_content)
}
