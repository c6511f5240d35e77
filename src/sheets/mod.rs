pub mod cache;
pub mod fetch;
pub mod table;

pub use cache::{clear_cache, get_cache_path, CacheConfig};
pub use fetch::{fetch_rows, fetch_tabs, SheetClient};
pub use table::{field, parse_rows, records, Record};

use anyhow::Result;

use crate::config::SheetConfig;

/// Publish-to-web CSV export for one tab of a Google Sheet.
const URL_TEMPLATE: &str =
    "https://docs.google.com/spreadsheets/d/e/{SHEET_ID}/pub?gid={GID}&single=true&output=csv";

/// Tab names the commands read from.
pub const FIXTURES_TAB: &str = "fixtures";
pub const LEAGUES_TAB: &str = "leagues";
pub const HANDICAPS_TAB: &str = "handicaps";
pub const COURSES_TAB: &str = "courses";

/// CSV export URL for a sheet tab by gid.
pub fn sheet_url_by_gid(sheet_id: &str, gid: &str) -> String {
    URL_TEMPLATE
        .replace("{SHEET_ID}", sheet_id)
        .replace("{GID}", gid)
}

/// CSV export URL for a named tab.
///
/// # Errors
///
/// Returns an error if the tab is not configured.
pub fn sheet_url(sheet: &SheetConfig, tab: &str) -> Result<String> {
    match sheet.tabs.get(tab) {
        Some(gid) => Ok(sheet_url_by_gid(&sheet.id, gid)),
        None => anyhow::bail!(
            "Unknown sheet tab: {} (configured: {})",
            tab,
            sheet.tabs.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_url_for_default_tabs() {
        let sheet = SheetConfig::default();
        let url = sheet_url(&sheet, LEAGUES_TAB).unwrap();
        assert!(url.starts_with("https://docs.google.com/spreadsheets/d/e/2PACX-"));
        assert!(url.ends_with("pub?gid=902750162&single=true&output=csv"));

        let url = sheet_url(&sheet, HANDICAPS_TAB).unwrap();
        assert!(url.contains("gid=0&"));
    }

    #[test]
    fn test_sheet_url_unknown_tab() {
        let sheet = SheetConfig::default();
        let err = sheet_url(&sheet, "outings").unwrap_err();
        assert!(err.to_string().contains("Unknown sheet tab: outings"));
    }

    #[test]
    fn test_sheet_url_by_gid() {
        assert_eq!(
            sheet_url_by_gid("abc", "42"),
            "https://docs.google.com/spreadsheets/d/e/abc/pub?gid=42&single=true&output=csv"
        );
    }
}
