// wordsweep/src/logger.rs
//! Logger setup for the wordsweep binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger` on stderr.
///
/// `RUST_LOG` is honoured with a `warn` default; an explicit `level` overrides
/// it. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
