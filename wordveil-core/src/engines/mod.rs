// wordveil-core/src/engines/mod.rs
//! This module contains different filter engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `FilterEngine` trait. This modular design allows for easy addition of
//! new engine types, such as normalized or stemmed matchers.
//!
//! To add a new engine, create a new file (e.g., `trie_engine.rs`),
//! define its logic, and declare it here using `pub mod <engine_name>;`.

pub mod trie_engine;
