// wordveil-core/src/engine.rs
//! Defines the core FilterEngine trait and related data structures.
//!
//! The `FilterEngine` trait provides a pluggable interface for different
//! keyword-detection methods. This module defines the contract that all
//! such engines must adhere to, ensuring a consistent and interchangeable
//! core API for `wordveil`.

use anyhow::Result;

use wordveil_automaton::automaton::Automaton;

use crate::config::FilterConfig;
use crate::match_event::{KeywordMatch, MaskSummaryItem};

/// A trait that defines the core functionality of a keyword filter engine.
///
/// This trait decouples the high-level application logic from the specific
/// matching implementation, allowing for different engines to be used
/// interchangeably. The bundled trie engine is total and never fails; the
/// `Result` returns exist so fallible engines can share the same contract.
pub trait FilterEngine: Send + Sync {
    /// Performs full filtering on the provided content.
    ///
    /// Finds every keyword occurrence, rewrites the content with the mask
    /// token, and returns the rewritten text together with a per-keyword
    /// summary of all matches.
    ///
    /// # Arguments
    /// * `content` - The input string to filter.
    /// * `source_id` - The name or identifier of the source being processed.
    fn filter(&self, content: &str, source_id: &str) -> Result<(String, Vec<MaskSummaryItem>)>;

    /// Byte-level variant of [`FilterEngine::filter`].
    ///
    /// Operates on raw bytes so inputs containing malformed UTF-8 can be
    /// filtered without loss: invalid sequences pass through unchanged.
    fn filter_bytes(&self, content: &[u8], source_id: &str)
        -> Result<(Vec<u8>, Vec<MaskSummaryItem>)>;

    /// Analyzes the provided content for keyword occurrences without
    /// rewriting it.
    ///
    /// This method backs the `scan` command. It returns a summary of all
    /// matched keywords; the original content is not modified.
    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<MaskSummaryItem>>;

    /// Byte-level variant of [`FilterEngine::analyze_for_stats`].
    ///
    /// Runs the same scan [`FilterEngine::filter_bytes`] runs, so analysis
    /// of input containing malformed UTF-8 reports exactly the matches a
    /// filter pass would mask. A lossy decode would not: replacement
    /// characters are symbols and would be elided inside candidates.
    fn analyze_bytes_for_stats(
        &self,
        content: &[u8],
        source_id: &str,
    ) -> Result<Vec<MaskSummaryItem>>;

    /// Finds all matches as a flattened vector with stable ordering and
    /// canonical sample hashes, ready for reporting layers.
    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<KeywordMatch>>;

    /// Returns a reference to the built automaton used by the engine.
    ///
    /// This is used by external components, such as the statistics
    /// command, to inspect the dictionary without rebuilding it.
    fn automaton(&self) -> &Automaton;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &FilterConfig;
}
