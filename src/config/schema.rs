use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::course::DEFAULT_COURSE;

/// Society sheet published by default.
pub const DEFAULT_SHEET_ID: &str =
    "2PACX-1vSE9aMT0c6AQ-wBzuXwYm5iQoAkwJLi0kaPuL3BfoJNT2dJXvr9r8WY_b4eJqDmAy5e4nnDgHbhpE4z";

/// Default lifetime of a cached sheet download
pub const DEFAULT_CACHE_TTL: &str = "10m";

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// sheet:
///   id: "2PACX-..."
///   tabs:
///     fixtures: "2003970244"
///     leagues: "902750162"
///     handicaps: "0"
/// api_url: "https://script.google.com/macros/s/.../exec"
/// default_course: Millicent
/// cache_ttl: 10m
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sheet: SheetConfig,

    /// Endpoint of the saved-scores API. Saving and loading rounds remotely
    /// is unavailable without it.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Course used by `score` when --course is not given
    #[serde(default)]
    pub default_course: Option<String>,

    /// How long a downloaded sheet is reused, e.g. "10m", "1h"
    #[serde(default)]
    pub cache_ttl: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            api_url: None,
            default_course: Some(DEFAULT_COURSE.to_string()),
            cache_ttl: Some(DEFAULT_CACHE_TTL.to_string()),
        }
    }
}

impl Config {
    pub fn default_course(&self) -> &str {
        self.default_course.as_deref().unwrap_or(DEFAULT_COURSE)
    }

    pub fn cache_ttl(&self) -> &str {
        self.cache_ttl.as_deref().unwrap_or(DEFAULT_CACHE_TTL)
    }
}

/// Published Google Sheet and the gid of each tab.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SheetConfig {
    pub id: String,

    /// Tab name -> gid
    pub tabs: BTreeMap<String, String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        let tabs = [
            ("fixtures", "2003970244"),
            ("leagues", "902750162"),
            ("handicaps", "0"),
        ]
        .into_iter()
        .map(|(name, gid)| (name.to_string(), gid.to_string()))
        .collect();

        Self {
            id: DEFAULT_SHEET_ID.to_string(),
            tabs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_course(), "Millicent");
        assert_eq!(config.cache_ttl(), "10m");
        assert!(config.api_url.is_none());
        assert_eq!(config.sheet.tabs.len(), 3);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
api_url: "https://example.com/exec"
default_course: Ardee
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://example.com/exec"));
        assert_eq!(config.default_course(), "Ardee");
        assert_eq!(config.sheet, SheetConfig::default());
        assert_eq!(config.cache_ttl(), "10m");
    }

    #[test]
    fn test_custom_sheet_parse() {
        let yaml = r#"
sheet:
  id: "abc123"
  tabs:
    fixtures: "1"
    leagues: "2"
    handicaps: "3"
    courses: "4"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.sheet.id, "abc123");
        assert_eq!(config.sheet.tabs.get("courses").map(String::as_str), Some("4"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "queries: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
