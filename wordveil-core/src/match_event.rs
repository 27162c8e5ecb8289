// wordveil-core/src/match_event.rs
//! Provides core data structures and utility functions for managing keyword
//! matches and sensitive data logging within the `wordveil-core` library.

use log::debug;
use serde::{Deserialize, Serialize};

use hex;
use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

lazy_static! {
    /// A static boolean that is initialized once to determine if matched
    /// content is allowed to appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("WORDVEIL_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Represents a single instance of a matched and masked keyword span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeywordMatch {
    /// The dictionary keyword that completed the match.
    pub keyword: String,
    /// The matched input span, including any elided interior symbols.
    pub original_string: String,
    /// The mask token that replaced the span.
    pub sanitized_string: String,
    pub start: u64,
    pub end: u64,
    #[serde(default)]
    pub line_number: Option<u64>,
    #[serde(default)]
    pub sample_hash: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub source_id: String,
}

/// Summary of all matches attributed to one keyword, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSummaryItem {
    pub keyword: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub sanitized_texts: Vec<String>,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_keyword_match_debug(
    module_path: &str,
    keyword: &str,
    original_sensitive_content: &str,
    sanitized_content: &str,
) {
    debug!(
        "{} Found KeywordMatch: Keyword='{}', Original='{}', Sanitized='{}'",
        module_path,
        get_loggable_content(keyword),
        get_loggable_content(original_sensitive_content),
        sanitized_content
    );
}

/// Hashes a matched sample, normalized, so repeated occurrences of the
/// same content dedupe to one entry in sample displays.
pub fn canonical_sample_hash(keyword: &str, snippet: &str) -> String {
    let normalized = snippet
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut hasher = Sha256::new();
    hasher.update(keyword.as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn ensure_match_hashes(matches: &mut [KeywordMatch]) {
    for m in matches.iter_mut() {
        if m.sample_hash.is_none() {
            let hash = canonical_sample_hash(&m.keyword, &m.original_string);
            m.sample_hash = Some(hash);
        }
    }
}
