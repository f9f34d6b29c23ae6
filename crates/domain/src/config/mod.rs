mod llm;
mod server;

pub use llm::*;
pub use server::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::ProjectRecord;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    /// The project record the assistant answers questions about.
    /// Defaults to the built-in demo project when the config file has no
    /// `[project]` table.
    #[serde(default)]
    pub project: ProjectRecord,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Malformed money amounts in the project record are Error-severity:
    /// they must fail startup rather than surface mid-session.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "server.port".into(),
                message: "port must be greater than 0".into(),
            });
        }

        if self.llm.provider.model.trim().is_empty() {
            issues.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "llm.provider.model".into(),
                message: "model must not be empty".into(),
            });
        }

        if self.llm.provider.auth.key.is_some() {
            issues.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "llm.provider.auth.key".into(),
                message: "plaintext API key in config; prefer the env field".into(),
            });
        }

        issues.extend(self.project.validate());
        issues
    }

    /// True when any issue is Error-severity.
    pub fn has_errors(issues: &[ConfigError]) -> bool {
        issues.iter().any(|i| i.severity == ConfigSeverity::Error)
    }
}
