mod schema;

pub use schema::{Config, SheetConfig, DEFAULT_CACHE_TTL, DEFAULT_SHEET_ID};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::course::CourseBook;

/// Get the config directory path (~/.config/clubhouse/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clubhouse")
}

/// Get the default config file path (~/.config/clubhouse/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/clubhouse/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error: the built-in defaults
/// point at the society's published sheet.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(
            "no config at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Parse the configured cache lifetime
pub fn cache_ttl(config: &Config) -> Result<Duration> {
    humantime::parse_duration(config.cache_ttl())
        .with_context(|| format!("Invalid cache_ttl '{}'", config.cache_ttl()))
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config, courses: &CourseBook) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.sheet.id.trim().is_empty() {
        errors.push("sheet.id: must not be empty".to_string());
    }
    for (tab, gid) in &config.sheet.tabs {
        if gid.trim().is_empty() {
            errors.push(format!("sheet.tabs.{}: gid must not be empty", tab));
        } else if !gid.trim().chars().all(|c| c.is_ascii_digit()) {
            errors.push(format!("sheet.tabs.{}: gid '{}' is not numeric", tab, gid));
        }
    }

    if let Some(ref url) = config.api_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            errors.push(format!("api_url: '{}' is not an http(s) URL", url));
        }
    }

    if courses.get(config.default_course()).is_none() {
        errors.push(format!(
            "default_course: unknown course '{}'",
            config.default_course()
        ));
    }

    if let Err(e) = cache_ttl(config) {
        errors.push(format!("cache_ttl: {:#}", e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
