#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "TOY_ROBOT_LOG";

/// Initialize logging. An explicit `level` wins; otherwise the level comes from
/// `TOY_ROBOT_LOG`, defaulting to `info` if unset or invalid.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(|| {
        env::var(LOG_ENV)
            .ok()
            .and_then(|lvl| lvl.parse().ok())
            .unwrap_or(LevelFilter::Info)
    });
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
