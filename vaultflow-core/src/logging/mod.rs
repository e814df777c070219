//! Logging backend for the `log` facade
//!
//! Library code only uses the standard `log` macros. Binaries call
//! [`init_logging`] once at startup to install the VaultFlow logger.
//!
//! # Example
//!
//! ```rust,no_run
//! use vaultflow_core::config::LoggingConfig;
//!
//! let config = LoggingConfig { format: "json".to_string(), ..LoggingConfig::default() };
//! vaultflow_core::logging::init_logging(&config).unwrap();
//!
//! log::info!("Role switched to {}", "viewer");
//! ```

pub mod formatter;

pub use formatter::{LogEntry, LogFormat};

use crate::config::LoggingConfig;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Log levels in order of severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(crate::Error::Config(format!("unknown log level '{}'", other))),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

impl std::str::FromStr for LogOutput {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            other => Err(crate::Error::Config(format!("unknown log output '{}'", other))),
        }
    }
}

/// Install the VaultFlow logger as the global `log` backend
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    // Validate eagerly so a bad config is reported even on repeat calls
    let logger = VaultflowLogger::new(config.level()?, config.format()?, config.output()?);

    INIT.call_once(|| {
        let max_level: log::LevelFilter = logger.level.into();
        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(max_level);
        }
    });
    Ok(())
}

struct VaultflowLogger {
    level: LogLevel,
    format: LogFormat,
    output: LogOutput,
}

impl VaultflowLogger {
    fn new(level: LogLevel, format: LogFormat, output: LogOutput) -> Self {
        Self { level, format, output }
    }
}

impl log::Log for VaultflowLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from(metadata.level()) <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format.format_entry(&LogEntry::from_log_record(record));
        let _ = match self.output {
            LogOutput::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            LogOutput::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
    }

    fn flush(&self) {
        let _ = match self.output {
            LogOutput::Stdout => std::io::stdout().flush(),
            LogOutput::Stderr => std::io::stderr().flush(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_level_ordering_matches_verbosity() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = VaultflowLogger::new(LogLevel::Warn, LogFormat::Human, LogOutput::Stderr);

        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_init_rejects_bad_config() {
        let config = LoggingConfig { level: "chatty".to_string(), ..LoggingConfig::default() };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
