//! Golf society companion: Stableford scorecards plus the society's league
//! standings, fixtures and handicaps read from its published spreadsheet.

pub mod browser;
pub mod config;
pub mod course;
pub mod fetch;
pub mod fixtures;
pub mod handicaps;
pub mod logging;
pub mod output;
pub mod rounds;
pub mod scoring;
pub mod sheets;
pub mod standings;
