// wordveil-core/src/engines/trie_engine.rs
//! A `FilterEngine` implementation backed by a prefix automaton and the
//! single-pass scanner from `wordveil-automaton`.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use wordveil_automaton::automaton::Automaton;
use wordveil_automaton::scanner::{ScanOutcome, Scanner};

use crate::builder::get_or_build_automaton;
use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::match_event::{
    ensure_match_hashes, log_keyword_match_debug, KeywordMatch, MaskSummaryItem,
};

/// The exact-substring keyword engine: one automaton walk, one rewrite
/// pass, no backtracking links.
#[derive(Debug)]
pub struct TrieEngine {
    automaton: Arc<Automaton>,
    scanner: Scanner,
    config: FilterConfig,
}

impl TrieEngine {
    pub fn new(config: FilterConfig) -> Result<Self> {
        let automaton = get_or_build_automaton(&config)
            .context("Failed to build keyword automaton for TrieEngine")?;
        let scanner = Scanner::with_mask(Arc::clone(&automaton), config.mask.clone());

        Ok(Self {
            automaton,
            scanner,
            config,
        })
    }

    /// Converts raw scan matches into reporting records with keyword
    /// attribution, line numbers, and timestamps.
    fn collect_matches(
        &self,
        outcome: &ScanOutcome,
        content: &[u8],
        source_id: &str,
    ) -> Vec<KeywordMatch> {
        let mut matches = Vec::with_capacity(outcome.matches.len());
        for m in &outcome.matches {
            let keyword = self
                .automaton
                .keyword_text(m.keyword)
                .unwrap_or_default()
                .to_string();
            let original = String::from_utf8_lossy(&content[m.start..m.end]).into_owned();
            let line_number =
                content[..m.start].iter().filter(|&&b| b == b'\n').count() as u64 + 1;

            log_keyword_match_debug(module_path!(), &keyword, &original, self.scanner.mask());

            matches.push(KeywordMatch {
                keyword,
                original_string: original,
                sanitized_string: self.scanner.mask().to_string(),
                start: m.start as u64,
                end: m.end as u64,
                line_number: Some(line_number),
                sample_hash: None,
                timestamp: Some(Utc::now().to_rfc3339()),
                source_id: source_id.to_string(),
            });
        }
        matches
    }

    /// Groups matches per keyword into summary items, sorted by keyword
    /// for deterministic output.
    fn summarize(matches: &[KeywordMatch]) -> Vec<MaskSummaryItem> {
        let mut grouped: HashMap<&str, MaskSummaryItem> = HashMap::new();
        for m in matches {
            let item = grouped
                .entry(m.keyword.as_str())
                .or_insert_with(|| MaskSummaryItem {
                    keyword: m.keyword.clone(),
                    occurrences: 0,
                    original_texts: Vec::new(),
                    sanitized_texts: Vec::new(),
                });
            item.occurrences += 1;
            item.original_texts.push(m.original_string.clone());
            item.sanitized_texts.push(m.sanitized_string.clone());
        }

        let mut summary: Vec<MaskSummaryItem> = grouped.into_values().collect();
        summary.sort_by(|a, b| a.keyword.cmp(&b.keyword));
        summary
    }
}

impl FilterEngine for TrieEngine {
    fn filter(&self, content: &str, source_id: &str) -> Result<(String, Vec<MaskSummaryItem>)> {
        let outcome = self.scanner.scan(content.as_bytes());
        let matches = self.collect_matches(&outcome, content.as_bytes(), source_id);
        let summary = Self::summarize(&matches);

        // Valid UTF-8 in, valid UTF-8 out; lossy is a no-op here.
        let filtered = String::from_utf8_lossy(&outcome.output).into_owned();
        Ok((filtered, summary))
    }

    fn filter_bytes(
        &self,
        content: &[u8],
        source_id: &str,
    ) -> Result<(Vec<u8>, Vec<MaskSummaryItem>)> {
        let outcome = self.scanner.scan(content);
        let matches = self.collect_matches(&outcome, content, source_id);
        let summary = Self::summarize(&matches);
        Ok((outcome.output, summary))
    }

    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<MaskSummaryItem>> {
        self.analyze_bytes_for_stats(content.as_bytes(), source_id)
    }

    fn analyze_bytes_for_stats(
        &self,
        content: &[u8],
        source_id: &str,
    ) -> Result<Vec<MaskSummaryItem>> {
        let outcome = self.scanner.scan(content);
        let matches = self.collect_matches(&outcome, content, source_id);
        Ok(Self::summarize(&matches))
    }

    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<KeywordMatch>> {
        let outcome = self.scanner.scan(content.as_bytes());
        let mut matches = self.collect_matches(&outcome, content.as_bytes(), source_id);
        ensure_match_hashes(&mut matches);
        matches.sort_by_key(|m| m.start);
        Ok(matches)
    }

    fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    fn config(&self) -> &FilterConfig {
        &self.config
    }
}
