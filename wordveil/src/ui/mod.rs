// wordveil/src/ui/mod.rs
//! Terminal output helpers: message formatting, summary tables, and the
//! diff viewer. Color is applied only when the destination is a terminal.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
