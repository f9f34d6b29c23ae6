//! The project record: the structured description of one construction
//! project that the assistant answers questions about.
//!
//! The record is immutable for the process lifetime and shared read-only
//! across sessions. A built-in demo project is used when the config file
//! has no `[project]` table, so the record acts as an injected
//! data-provider stand-in rather than a live feed.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigSeverity};
use crate::error::{Error, Result};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Record types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A named milestone with its (possibly expected) date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    /// ISO date, optionally annotated `"(Expected)"`.
    pub date: String,
}

/// One dated entry in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    pub description: String,
}

/// The full project record.
///
/// Milestones and activities are kept as ordered vectors so the serialized
/// context preserves the record's declared order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub id: String,
    /// Free status string, e.g. "On Schedule" or "Delayed".
    pub status: String,
    /// Progress percentage as displayed, e.g. "75%".
    pub progress: String,
    /// Currency-formatted total budget, e.g. "$500,000,000".
    pub budget: String,
    /// Currency-formatted spend to date.
    pub spent_to_date: String,
    /// Free-text safety incident summary.
    pub safety_incidents: String,
    /// Free-text description of where the data comes from.
    pub data_source: String,
    // Kept after the scalar fields so TOML serialization (scalar values
    // before arrays-of-tables) round-trips.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            name: "Brisbane CBD Skyscraper".into(),
            id: "BRS-101".into(),
            status: "On Schedule".into(),
            progress: "75%".into(),
            budget: "$500,000,000".into(),
            spent_to_date: "$375,000,000".into(),
            milestones: vec![
                Milestone {
                    name: "Foundation Completed".into(),
                    date: "2025-06-30".into(),
                },
                Milestone {
                    name: "Structural Frame Topped Out".into(),
                    date: "2026-03-15".into(),
                },
                Milestone {
                    name: "Exterior Cladding Finished".into(),
                    date: "2026-10-30 (Expected)".into(),
                },
                Milestone {
                    name: "Interior Fit-out Commenced".into(),
                    date: "2026-11-01 (Expected)".into(),
                },
                Milestone {
                    name: "Final Handover".into(),
                    date: "2027-06-15 (Expected)".into(),
                },
            ],
            activities: vec![
                Activity {
                    date: "2025-08-18".into(),
                    description: "Completed installation of facade panels on floors 15-20.".into(),
                },
                Activity {
                    date: "2025-08-19".into(),
                    description: "Began interior framing on floor 12.".into(),
                },
                Activity {
                    date: "2025-08-20".into(),
                    description: "Inspected and approved electrical rough-in on floor 10.".into(),
                },
            ],
            safety_incidents: "No major incidents reported this week. One minor cut recorded on Tuesday.".into(),
            data_source: "Real-time feeds from site management, financial systems, and project schedules.".into(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Finances
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parsed financial view of the record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Finances {
    pub budget: f64,
    pub spent: f64,
}

impl Finances {
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    pub fn overspent(&self) -> bool {
        self.spent > self.budget
    }
}

/// Parse a currency-formatted amount like `"$500,000,000"`.
///
/// Strips `$` and thousands separators, then requires a non-negative
/// decimal number.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(Error::Config(format!("empty amount: {raw:?}")));
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| Error::Config(format!("unparseable amount: {raw:?}")))?;
    if value < 0.0 {
        return Err(Error::Config(format!("negative amount: {raw:?}")));
    }
    Ok(value)
}

impl ProjectRecord {
    /// Parse the budget and spend fields into a [`Finances`] view.
    pub fn finances(&self) -> Result<Finances> {
        Ok(Finances {
            budget: parse_amount(&self.budget)?,
            spent: parse_amount(&self.spent_to_date)?,
        })
    }

    /// Startup-time validation: blank required fields and malformed money
    /// amounts are Error-severity so they halt bootstrap instead of
    /// surfacing mid-session.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("project.name", &self.name),
            ("project.id", &self.id),
            ("project.status", &self.status),
            ("project.progress", &self.progress),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigError {
                    severity: ConfigSeverity::Error,
                    field: field.into(),
                    message: "must not be empty".into(),
                });
            }
        }

        for (field, value) in [
            ("project.budget", &self.budget),
            ("project.spent_to_date", &self.spent_to_date),
        ] {
            if let Err(e) = parse_amount(value) {
                issues.push(ConfigError {
                    severity: ConfigSeverity::Error,
                    field: field.into(),
                    message: e.to_string(),
                });
            }
        }

        issues
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_currency_formatted() {
        assert_eq!(parse_amount("$500,000,000").unwrap(), 500_000_000.0);
        assert_eq!(parse_amount("$375,000,000").unwrap(), 375_000_000.0);
        assert_eq!(parse_amount("1234.56").unwrap(), 1234.56);
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("$").is_err());
        assert!(parse_amount("TBD").is_err());
        assert!(parse_amount("-$100").is_err());
    }

    #[test]
    fn default_record_finances() {
        let fin = ProjectRecord::default().finances().unwrap();
        assert_eq!(fin.budget, 500_000_000.0);
        assert_eq!(fin.spent, 375_000_000.0);
        assert_eq!(fin.remaining(), 125_000_000.0);
        assert!(!fin.overspent());
    }

    #[test]
    fn overspend_detected() {
        let fin = Finances {
            budget: 500_000_000.0,
            spent: 600_000_000.0,
        };
        assert!(fin.overspent());
        assert_eq!(fin.remaining(), -100_000_000.0);
    }

    #[test]
    fn default_record_validates_clean() {
        assert!(ProjectRecord::default().validate().is_empty());
    }

    #[test]
    fn malformed_budget_is_error_severity() {
        let record = ProjectRecord {
            budget: "half a billion".into(),
            ..ProjectRecord::default()
        };
        let issues = record.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Error);
        assert_eq!(issues[0].field, "project.budget");
    }

    #[test]
    fn blank_status_is_error_severity() {
        let record = ProjectRecord {
            status: "  ".into(),
            ..ProjectRecord::default()
        };
        let issues = record.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "project.status");
    }
}
