use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashMap;

use super::cache::{read_cached_sheet, write_cached_sheet, CacheConfig, CachedSheet};
use super::table::parse_rows;
use crate::config::SheetConfig;

/// Downloads published sheet tabs as CSV.
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    sheet: SheetConfig,
    cache: CacheConfig,
}

impl SheetClient {
    pub fn new(sheet: SheetConfig, cache: CacheConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("clubhouse/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http, sheet, cache })
    }

    pub fn sheet(&self) -> &SheetConfig {
        &self.sheet
    }

    /// Fetch the CSV body for a tab.
    ///
    /// A fresh cache entry is served without a request. If the request fails
    /// and a stale entry exists, the stale body is served with a warning.
    /// One request per call, no retry.
    pub async fn fetch_csv(&self, tab: &str) -> Result<String> {
        let url = super::sheet_url(&self.sheet, tab)?;

        let stale = match lookup_cache(&self.cache, &url) {
            CacheLookup::Fresh(body) => {
                tracing::debug!("{}: served from cache", tab);
                return Ok(body);
            }
            CacheLookup::Miss(stale) => stale,
        };

        tracing::debug!("{}: fetching {}", tab, url);
        let downloaded = self.download(&url).await;
        settle_download(&self.cache, tab, &url, stale, downloaded)
    }

    async fn download(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to reach the society sheet")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Sheet request failed with HTTP {}", status);
        }

        response
            .text()
            .await
            .context("Failed to read sheet response")
    }
}

/// What the cache holds for a URL before any request is made.
#[derive(Debug, PartialEq)]
enum CacheLookup {
    /// Young enough to serve as is
    Fresh(String),
    /// Must download; carries an old entry to fall back on, if any
    Miss(Option<CachedSheet>),
}

fn lookup_cache(cache: &CacheConfig, url: &str) -> CacheLookup {
    if !cache.enabled {
        return CacheLookup::Miss(None);
    }
    match read_cached_sheet(&cache.path, url) {
        Some(entry) if entry.is_fresh(cache.ttl) => CacheLookup::Fresh(entry.body),
        entry => CacheLookup::Miss(entry),
    }
}

/// Decide what a download attempt yields: store a new body, or fall back to
/// the stale entry when the download failed.
fn settle_download(
    cache: &CacheConfig,
    tab: &str,
    url: &str,
    stale: Option<CachedSheet>,
    downloaded: Result<String>,
) -> Result<String> {
    match downloaded {
        Ok(body) => {
            if cache.enabled {
                // Cache write failures never fail the command
                let entry = CachedSheet::new(body.clone());
                if let Err(e) = write_cached_sheet(&cache.path, url, &entry) {
                    tracing::debug!("{}: {:#}", tab, e);
                }
            }
            Ok(body)
        }
        Err(e) => match stale {
            Some(entry) => {
                tracing::warn!("{}: fetch failed ({:#}), using cached copy", tab, e);
                Ok(entry.body)
            }
            None => Err(e),
        },
    }
}

/// Fetch one tab and split it into CSV rows.
pub async fn fetch_rows(client: &SheetClient, tab: &str) -> Result<Vec<Vec<String>>> {
    let body = client.fetch_csv(tab).await?;
    let rows = parse_rows(&body);
    tracing::info!("{}: {} rows", tab, rows.len());
    Ok(rows)
}

/// Fetch several tabs concurrently.
///
/// A failing tab is reported and left out of the result; the call only
/// fails if every tab failed.
pub async fn fetch_tabs(
    client: &SheetClient,
    tabs: &[&str],
) -> Result<HashMap<String, Vec<Vec<String>>>> {
    let mut futures = FuturesUnordered::new();
    for &tab in tabs {
        let client = client.clone();
        futures.push(async move {
            let result = fetch_rows(&client, tab).await;
            (tab, result)
        });
    }

    let mut fetched = HashMap::new();
    while let Some((tab, result)) = futures.next().await {
        match result {
            Ok(rows) => {
                fetched.insert(tab.to_string(), rows);
            }
            Err(e) => {
                tracing::warn!("{}: {:#}", tab, e);
            }
        }
    }

    if fetched.is_empty() && !tabs.is_empty() {
        anyhow::bail!("All sheet requests failed. Check your network connection.");
    }

    Ok(fetched)
}
