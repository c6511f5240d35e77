use anyhow::{Context, Result};

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

/// Web address of a published sheet tab, for viewing rather than CSV export.
pub fn tab_page_url(sheet_id: &str, gid: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/e/{}/pubhtml?gid={}&single=true",
        sheet_id, gid
    )
}
