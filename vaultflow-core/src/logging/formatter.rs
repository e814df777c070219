//! Log entry and output formats

use super::LogLevel;
use chrono::{DateTime, Utc};

/// A single log record, decoupled from `log::Record` lifetimes
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, target: impl Into<String>) -> Self {
        Self { timestamp: Utc::now(), level, target: target.into(), message: message.into() }
    }

    pub fn from_log_record(record: &log::Record) -> Self {
        Self::new(record.level().into(), record.args().to_string(), record.target())
    }
}

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `2026-01-15 10:30:00.000 INFO  [vaultflow_core::session] Session restored`
    Human,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(crate::Error::Config(format!("unknown log format '{}'", other))),
        }
    }
}

impl LogFormat {
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self {
            LogFormat::Human => format_human(entry),
            LogFormat::Json => format_json(entry),
        }
    }
}

fn format_json(entry: &LogEntry) -> String {
    let mut json = serde_json::Map::new();

    json.insert("timestamp".to_string(), entry.timestamp.to_rfc3339().into());
    json.insert("level".to_string(), entry.level.as_str().into());
    json.insert("target".to_string(), entry.target.clone().into());
    json.insert("message".to_string(), entry.message.clone().into());

    serde_json::to_string(&json).unwrap_or_else(|_| "Failed to serialize log entry".to_string())
}

fn format_human(entry: &LogEntry) -> String {
    let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
    format!("{} {:5} [{}] {}", timestamp, entry.level.as_str(), entry.target, entry.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(LogLevel::Info, "Session restored", "vaultflow_core::session");

        let formatted = LogFormat::Json.format_entry(&entry);

        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed["message"], "Session restored");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["target"], "vaultflow_core::session");
        assert_eq!(parsed.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_human_format() {
        let entry = LogEntry::new(LogLevel::Warn, "Role store unavailable", "vaultflow_core::session");

        let formatted = LogFormat::Human.format_entry(&entry);

        assert!(formatted.contains("WARN"));
        assert!(formatted.contains("[vaultflow_core::session]"));
        assert!(formatted.contains("Role store unavailable"));
        assert!(formatted.ends_with("Role store unavailable"));
    }

    #[test]
    fn test_entry_from_log_record() {
        let entry = LogEntry::from_log_record(
            &log::Record::builder()
                .args(format_args!("Switched role to {}", "viewer"))
                .level(log::Level::Debug)
                .target("vaultflow_core::session::manager")
                .build(),
        );
        assert_eq!(entry.level, LogLevel::Debug);
        assert_eq!(entry.message, "Switched role to viewer");
        assert_eq!(entry.target, "vaultflow_core::session::manager");

        let parsed: serde_json::Value =
            serde_json::from_str(&LogFormat::Json.format_entry(&entry)).unwrap();
        assert_eq!(parsed["message"], "Switched role to viewer");
        assert_eq!(parsed["level"], "DEBUG");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
