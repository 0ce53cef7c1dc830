//! Rolling Logger
//!
//! `log` backend that keeps the last N formatted records in memory and
//! forwards every record to the browser console (wasm32) or stderr.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buf| buf.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut buf) = self.buffer.lock() {
            if buf.len() == self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {:<5} {}: {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Only the first call takes effect.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger, empty before `init`
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::snapshot).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    match level {
        Level::Error => console::error_1(&line.into()),
        Level::Warn => console::warn_1(&line.into()),
        Level::Info => console::info_1(&line.into()),
        Level::Debug | Level::Trace => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_to(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Debug, 2);
        log_to(&logger, Level::Info, "one");
        log_to(&logger, Level::Info, "two");
        log_to(&logger, Level::Info, "three");

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Info, 8);
        log_to(&logger, Level::Debug, "hidden");
        log_to(&logger, Level::Warn, "shown");

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
    }
}
