#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

const LEVEL_VAR: &str = "VAULT_SOLVER_LOG";

/// Stderr logger; each line carries the record's level and target so engine
/// traces (`vault_solver::ai`, `vault_solver::discovery`, ...) stand apart
/// from front-end messages.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `VAULT_SOLVER_LOG` (`off`, `error` .. `trace`), `info` when
/// unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    match env::var(LEVEL_VAR) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            eprintln!("ignoring {}={:?}, using info", LEVEL_VAR, value);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    }
}

/// Install the stderr logger at the level from the environment. Later calls
/// are ignored.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
