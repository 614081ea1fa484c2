//! Logging support for the disassembler.

use colored::*;
use log::{LevelFilter, Log, Metadata, Record};

/// Logging implementation for the Log trait. Records go to stderr so the
/// listing itself can be piped or written to a file untouched.
pub struct Logger {
  level_filter: LevelFilter,
}

impl Logger {
  /// Create a new Logger with the provided level filter.
  pub fn new(level: LevelFilter) -> Self {
    Logger {
      level_filter: level,
    }
  }
}

impl Log for Logger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= self.level_filter
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let colored_level = match record.level() {
        log::Level::Error => format!("{}", record.level()).red(),
        log::Level::Warn => format!("{}", record.level()).yellow(),
        log::Level::Info => format!("{}", record.level()).cyan(),
        log::Level::Debug => format!("{}", record.level()).normal(),
        log::Level::Trace => format!("{}", record.level()).dimmed(),
      };
      eprintln!(
        "[{:5}] [{}] {}",
        colored_level,
        record.metadata().target(),
        record.args()
      );
    }
  }

  fn flush(&self) {}
}

/// Install the logger once and set the level filter
pub fn init_logging(level_filter: LevelFilter) {
  log::set_max_level(level_filter);
  let logger: &'static Logger = Box::leak(Box::new(Logger::new(level_filter)));
  if let Err(msg) = log::set_logger(logger) {
    panic!("Failed to initialize logging: {}", msg);
  }
  log::debug!("Log level {} enabled", level_filter);
}

#[cfg(test)]
mod tests {
  use super::*;
  use log::Level;

  #[test]
  fn test_logger_respects_filter() {
    let logger = Logger::new(LevelFilter::Warn);
    let warn = Metadata::builder().level(Level::Warn).build();
    let info = Metadata::builder().level(Level::Info).build();
    assert!(logger.enabled(&warn));
    assert!(!logger.enabled(&info));
  }

  #[test]
  fn test_logger_off() {
    let logger = Logger::new(LevelFilter::Off);
    let error = Metadata::builder().level(Level::Error).build();
    assert!(!logger.enabled(&error));
  }
}
