use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Configuration for sheet response caching
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub enabled: bool, // false when --no-cache
    pub ttl: Duration,
    pub path: PathBuf,
}

impl CacheConfig {
    pub fn new(enabled: bool, ttl: Duration) -> Self {
        Self {
            enabled,
            ttl,
            path: get_cache_path(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ttl: Duration::ZERO,
            path: get_cache_path(),
        }
    }
}

/// Get the platform-appropriate cache directory for clubhouse
pub fn get_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join("clubhouse/sheet-cache"))
        .unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}/.cache/clubhouse/sheet-cache",
                std::env::var("HOME").unwrap_or_default()
            ))
        })
}

/// Clear the sheet cache directory
pub fn clear_cache(cache_path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(cache_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to remove cache directory"),
    }
}

/// A sheet body as last downloaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSheet {
    pub body: String,
    pub fetched_at: u64, // Unix timestamp
}

impl CachedSheet {
    pub fn new(body: String) -> Self {
        Self {
            body,
            fetched_at: now_secs(),
        }
    }

    /// Whether the entry is younger than `ttl`
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        now_secs().saturating_sub(self.fetched_at) < ttl.as_secs()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Read a cached sheet body keyed by URL
pub fn read_cached_sheet(cache_path: &Path, url: &str) -> Option<CachedSheet> {
    let bytes = cacache::read_sync(cache_path, url).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Write a sheet body to the cache
pub fn write_cached_sheet(cache_path: &Path, url: &str, entry: &CachedSheet) -> Result<()> {
    let json = serde_json::to_vec(entry)?;
    cacache::write_sync(cache_path, url, json)
        .with_context(|| format!("Failed to cache sheet {}", url))?;
    Ok(())
}
