//! Logger setup.
//!
//! The terminal is in raw mode while the game runs, so log lines go to a file
//! in the data directory. `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::path::Path;

pub fn init_logging(log_path: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!(
                "Could not open log file {}: {} (logging to stderr)",
                log_path.display(),
                e
            );
        }
    }

    // A second init (tests, repeated calls) is harmless.
    let _ = builder.try_init();
}
