//! builder.rs - Manages the construction and caching of keyword automatons.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `FilterConfig` into a built [`Automaton`], optimized for repeated
//! engine construction. It uses a global, shared cache keyed by a
//! deterministic hash of the keyword set to avoid redundant builds.

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use wordveil_automaton::automaton::Automaton;

use crate::config::{FilterConfig, MAX_KEYWORD_LENGTH};
use crate::errors::WordveilError;

lazy_static! {
    /// A thread-safe, global cache of built automatons.
    /// The key is a hash of the sorted keyword dictionary.
    static ref AUTOMATON_CACHE: RwLock<HashMap<u64, Arc<Automaton>>> = RwLock::new(HashMap::new());
}

/// Hashes the keyword dictionary to create a stable, unique cache key.
///
/// To ensure determinism, keywords are sorted before hashing. The mask is
/// excluded: it is a property of the scanner, not the tree.
fn hash_keywords(config: &FilterConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut keywords_to_hash = config.keywords.clone();
    keywords_to_hash.sort();
    keywords_to_hash.hash(&mut hasher);
    hasher.finish()
}

/// Builds an automaton from a keyword list.
///
/// This is the low-level function that performs the actual insertion.
/// Entries are trimmed first; blank entries are skipped with a warning
/// (the automaton's own empty-keyword guard backstops this), and
/// over-long entries abort the build.
pub fn build_automaton(keywords: &[String]) -> Result<Automaton, WordveilError> {
    debug!("Starting automaton build from {} keywords.", keywords.len());

    let mut automaton = Automaton::new();
    let mut build_errors = Vec::new();

    for keyword in keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            warn!("Skipping blank keyword entry.");
            continue;
        }

        let length = trimmed.chars().count();
        if length > MAX_KEYWORD_LENGTH {
            build_errors.push(WordveilError::KeywordTooLong(
                trimmed.to_string(),
                length,
                MAX_KEYWORD_LENGTH,
            ));
            continue;
        }

        automaton.insert(trimmed);
    }

    if !build_errors.is_empty() {
        let error_message = build_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(WordveilError::Fatal(format!(
            "Failed to insert {} keyword(s):\n{}",
            build_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished automaton build. Keywords: {}, states: {}.",
            automaton.keyword_count(),
            automaton.state_count()
        );
        Ok(automaton)
    }
}

/// Gets a built [`Automaton`] from the cache or builds it if not found.
///
/// This is the public entry point for engine construction. It returns an
/// `Arc` to a built automaton, allowing cheap read-only sharing across
/// engines and concurrent scans.
pub fn get_or_build_automaton(config: &FilterConfig) -> Result<Arc<Automaton>> {
    let cache_key = hash_keywords(config);

    // Attempt to acquire a read lock first.
    {
        let cache = AUTOMATON_CACHE.read().unwrap();
        if let Some(automaton) = cache.get(&cache_key) {
            debug!("Serving automaton from cache for key: {}", &cache_key);
            return Ok(Arc::clone(automaton));
        }
    } // Read lock is released here.

    debug!("Automaton not found in cache. Building now.");
    let automaton = build_automaton(&config.keywords)?;
    let automaton_arc = Arc::new(automaton);

    AUTOMATON_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&automaton_arc));

    debug!("Successfully built and cached automaton for key: {}", &cache_key);
    Ok(automaton_arc)
}
