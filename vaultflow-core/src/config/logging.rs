//! Logging configuration

use crate::logging::{LogFormat, LogLevel, LogOutput};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env: VAULTFLOW_LOG_LEVEL
    pub level: String,
    /// "human" or "json"
    /// Env: VAULTFLOW_LOG_FORMAT
    pub format: String,
    /// "stdout" or "stderr"
    pub output: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "human".to_string(), output: "stderr".to_string() }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    /// Values are checked by [`validate`](Self::validate)
    pub fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("VAULTFLOW_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = lookup("VAULTFLOW_LOG_FORMAT") {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.level()?;
        self.format()?;
        self.output()?;
        Ok(())
    }

    pub fn level(&self) -> Result<LogLevel> {
        self.level.parse().with_context(|| format!("Invalid log level '{}'", self.level))
    }

    pub fn format(&self) -> Result<LogFormat> {
        self.format.parse().with_context(|| format!("Invalid log format '{}'", self.format))
    }

    pub fn output(&self) -> Result<LogOutput> {
        self.output.parse().with_context(|| format!("Invalid log output '{}'", self.output))
    }
}
