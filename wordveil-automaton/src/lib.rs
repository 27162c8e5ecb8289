// wordveil-automaton/src/lib.rs
//! Low-level keyword detection core for wordveil.
//!
//! This crate holds the pure algorithmic pieces, free of configuration and
//! I/O concerns: a prefix automaton (trie) over Unicode code points, a
//! stateless symbol classifier, and a single-pass scanner that rewrites a
//! byte buffer by replacing every recognized keyword span with a mask token.
//!
//! The automaton is built once and then shared read-only; scans never
//! mutate it, so any number of scans may run concurrently against the same
//! automaton.

pub mod automaton;
pub mod scanner;
pub mod symbols;

/// Index of a state inside an [`automaton::Automaton`] arena.
pub type StateId = u32;

/// Index of a keyword inside an automaton's keyword table.
pub type KeywordId = u32;
