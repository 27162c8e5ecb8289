// wordveil-core/src/lib.rs
//! # Wordveil Core Library
//!
//! `wordveil-core` provides the fundamental, platform-independent logic for
//! sensitive-word detection and masking. It defines the keyword dictionary
//! configuration, a cached builder that turns dictionaries into prefix
//! automatons, and a pluggable `FilterEngine` trait for applying the
//! single-pass rewrite.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on a fixed dictionary, without
//! concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` for specifying keyword dictionaries and the mask token.
//! * `builder`: Builds and caches keyword automatons from configurations.
//! * `match_event`: Defines data structures for detailed reporting of mask events.
//! * `engine`: Defines the `FilterEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `FilterEngine` trait.
//! * `headless`: Convenience wrappers for using core engines in a non-interactive mode.
//! * `errors`: Structured error types for the library.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordveil_core::{FilterConfig, headless_filter_string};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Build a dictionary.
//!     let config = FilterConfig {
//!         keywords: vec!["abc".to_string()],
//!         ..FilterConfig::default()
//!     };
//!
//!     // 2. Filter some content in a single, headless function call.
//!     let filtered = headless_filter_string(config, "say abc, or a-b-c", "example.txt")?;
//!     assert_eq!(filtered, "say ***, or ***");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations at its seams and
//! defines the structured `WordveilError` for programmatic handling. The
//! filter itself is total: every input string, including empty strings and
//! malformed byte sequences, produces a defined output.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `FilterEngine` trait allows different
//!   matching strategies to be swapped out seamlessly.
//! * **Build once, scan many:** a built automaton is immutable and shared
//!   read-only; concurrent scans need no coordination.
//! * **Stateless:** The core library does not maintain application state.

// All modules must be declared before they can be used.
pub mod builder;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod match_event;

/// Re-exports the public configuration types and functions for managing
/// keyword dictionaries.
pub use config::{
    merge_configs, parse_wordlist, validate_keywords, FilterConfig, DEFAULT_MASK,
    MAX_KEYWORD_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordveilError;

/// Re-exports types related to the core filter engine trait.
pub use engine::FilterEngine;

/// Re-exports the concrete `TrieEngine` implementation.
pub use engines::trie_engine::TrieEngine;

/// Re-exports types for detailed keyword matches and sensitive data reporting.
pub use match_event::{
    canonical_sample_hash, ensure_match_hashes, redact_sensitive, KeywordMatch, MaskSummaryItem,
};

/// Re-exports the cached automaton builder.
pub use builder::{build_automaton, get_or_build_automaton};

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{headless_filter_bytes, headless_filter_string};

/// Re-exports the low-level automaton and scanner for advanced usage.
pub use wordveil_automaton::automaton::Automaton;
pub use wordveil_automaton::scanner::{ScanMatch, ScanOutcome, Scanner};
