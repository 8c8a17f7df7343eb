#![cfg(feature = "std")]

//! Stderr logger for the binaries. Menu and JSON output own stdout.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error`, ... `trace`).
pub const LOG_ENV: &str = "BAYES_SEARCH_LOG";

struct SessionLogger;

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{}", format_record(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: SessionLogger = SessionLogger;

/// `level target: message`, with the crate prefix dropped from the target.
fn format_record(record: &Record) -> String {
    let target = record
        .target()
        .strip_prefix("bayes_search::")
        .unwrap_or(record.target());
    format!("{:<5} {}: {}", record.level(), target, record.args())
}

/// Parse a level from the environment value, falling back to `info`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from `BAYES_SEARCH_LOG`.
/// Later calls keep the first logger.
pub fn init_logging() {
    let value = env::var(LOG_ENV).ok();
    let level = level_from(value.as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
