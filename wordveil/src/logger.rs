// wordveil/src/logger.rs
//! Logger initialization for the wordveil CLI and its tests.
//!
//! Respects `RUST_LOG` from the environment; an explicit level passed by
//! the CLI flags takes precedence. Initialization is `Once`-guarded so
//! repeated calls (e.g. from tests) are harmless.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(level) = level {
            builder.filter_level(level);
        }
        let _ = builder.try_init();
    });
}
