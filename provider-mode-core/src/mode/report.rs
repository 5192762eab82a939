//! ModeReport entity
//!
//! A snapshot of one resolution together with where the value came from,
//! for diagnostics and machine-readable output.

use super::ProviderMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which store supplied the provider mode value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// An explicitly defined property
    Property,
    /// The process environment
    Environment,
    /// No store held a value
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeReport {
    pub mode: ProviderMode,
    pub classpath: bool,
    pub lenient: bool,
    /// Raw value (absent when the property is unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub source: ValueSource,
    pub determined_at: DateTime<Utc>,
}

impl ModeReport {
    /// Classify `value` and record it with its source
    pub fn new(value: Option<String>, source: ValueSource) -> Self {
        let mode = ProviderMode::from_value(value.as_deref());
        Self {
            mode,
            classpath: mode.is_classpath(),
            lenient: mode.is_lenient(),
            value,
            source,
            determined_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_unset_value() {
        let report = ModeReport::new(None, ValueSource::Default);
        assert_eq!(report.mode, ProviderMode::Default);
        assert!(!report.classpath);
        assert!(!report.lenient);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "default");
        assert_eq!(json["source"], "default");
        assert!(json.get("value").is_none());
        assert!(json.get("determined_at").is_some());
    }

    #[test]
    fn test_report_for_lenient_value() {
        let report = ModeReport::new(
            Some("lenient-classpath".to_string()),
            ValueSource::Environment,
        );
        assert!(report.classpath);
        assert!(report.lenient);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "lenient-classpath");
        assert_eq!(json["value"], "lenient-classpath");
        assert_eq!(json["source"], "environment");
        assert_eq!(json["classpath"], true);
    }
}
