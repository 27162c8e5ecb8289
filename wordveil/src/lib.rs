// wordveil/src/lib.rs
//! # Wordveil CLI Application
//!
//! This crate provides the command-line interface for the wordveil
//! keyword-masking engine: argument parsing, dictionary assembly from
//! files and flags, and terminal output (summaries, diffs, colors).

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::build_config;
