// markstyle/src/logger.rs
//! Logger initialization for the markstyle CLI.
//!
//! Respects `RUST_LOG` by default; the `--quiet` and `--debug` flags
//! override it with an explicit level filter.

use log::LevelFilter;

/// Initializes the global logger. Passing `Some(level)` overrides any
/// `RUST_LOG` setting; `None` defers to the environment.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
