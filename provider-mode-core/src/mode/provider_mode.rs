//! ProviderMode entity
//!
//! The classification of a provider mode value. Never stored; derived again on
//! every query.

use super::{LENIENT_CLASSPATH_MODE_VALUE, STRICT_CLASSPATH_MODE_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How classpath resolution failures are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Failures are surfaced
    Strict,
    /// Failures are tolerated
    Lenient,
}

/// Operating mode of the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ProviderMode {
    /// Normal execution (value absent or unrecognized)
    #[default]
    Default,
    /// Build-script classpath is exposed via a side channel
    Classpath(Strictness),
}

impl ProviderMode {
    /// Classify a raw property value.
    ///
    /// Matching is exact: no trimming, no case folding.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(STRICT_CLASSPATH_MODE_VALUE) => Self::Classpath(Strictness::Strict),
            Some(LENIENT_CLASSPATH_MODE_VALUE) => Self::Classpath(Strictness::Lenient),
            _ => Self::Default,
        }
    }

    pub fn is_classpath(&self) -> bool {
        matches!(self, Self::Classpath(_))
    }

    pub fn is_lenient(&self) -> bool {
        matches!(self, Self::Classpath(Strictness::Lenient))
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Classpath(Strictness::Strict))
    }

    /// Strictness when in classpath mode
    pub fn strictness(&self) -> Option<Strictness> {
        match self {
            Self::Default => None,
            Self::Classpath(strictness) => Some(*strictness),
        }
    }

    /// Stable name used in CLI output and serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Classpath(Strictness::Strict) => "strict-classpath",
            Self::Classpath(Strictness::Lenient) => "lenient-classpath",
        }
    }
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProviderMode> for String {
    fn from(mode: ProviderMode) -> Self {
        mode.as_str().to_string()
    }
}

impl TryFrom<String> for ProviderMode {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.as_str() {
            "default" => Ok(Self::Default),
            "strict-classpath" => Ok(Self::Classpath(Strictness::Strict)),
            "lenient-classpath" => Ok(Self::Classpath(Strictness::Lenient)),
            other => Err(format!("Unknown provider mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_default() {
        let mode = ProviderMode::from_value(None);
        assert_eq!(mode, ProviderMode::Default);
        assert!(!mode.is_classpath());
        assert!(!mode.is_lenient());
        assert!(!mode.is_strict());
        assert_eq!(mode.strictness(), None);
    }

    #[test]
    fn test_strict_literal() {
        let mode = ProviderMode::from_value(Some("classpath"));
        assert_eq!(mode, ProviderMode::Classpath(Strictness::Strict));
        assert!(mode.is_classpath());
        assert!(mode.is_strict());
        assert!(!mode.is_lenient());
    }

    #[test]
    fn test_lenient_literal() {
        let mode = ProviderMode::from_value(Some("lenient-classpath"));
        assert_eq!(mode, ProviderMode::Classpath(Strictness::Lenient));
        assert!(mode.is_classpath());
        assert!(mode.is_lenient());
        assert!(!mode.is_strict());
    }

    #[test]
    fn test_near_misses_are_default() {
        for value in [
            "",
            "xyz",
            "bogus",
            "Classpath",
            "CLASSPATH",
            " classpath",
            "classpath ",
            "strict-classpath",
            "lenient",
        ] {
            assert_eq!(
                ProviderMode::from_value(Some(value)),
                ProviderMode::Default,
                "'{}' must not be recognized",
                value
            );
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProviderMode::Default.to_string(), "default");
        assert_eq!(
            ProviderMode::Classpath(Strictness::Strict).to_string(),
            "strict-classpath"
        );
        assert_eq!(
            ProviderMode::Classpath(Strictness::Lenient).to_string(),
            "lenient-classpath"
        );
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ProviderMode::Classpath(Strictness::Lenient)).unwrap();
        assert_eq!(json, "\"lenient-classpath\"");

        let parsed: ProviderMode = serde_json::from_str("\"strict-classpath\"").unwrap();
        assert_eq!(parsed, ProviderMode::Classpath(Strictness::Strict));

        assert!(serde_json::from_str::<ProviderMode>("\"classpath\"").is_err());
    }
}
