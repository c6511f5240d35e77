use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use super::api::RoundKey;
use super::types::SavedRound;

const ROUND_BOOK_VERSION: u32 = 1;

/// Rounds kept on this machine, for use without the scores API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundBook {
    pub version: u32,
    #[serde(default)]
    pub rounds: Vec<SavedRound>,
}

impl Default for RoundBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundBook {
    pub fn new() -> Self {
        Self {
            version: ROUND_BOOK_VERSION,
            rounds: Vec::new(),
        }
    }

    /// Add a round, stamping it so it can be told apart from others on the
    /// same day.
    pub fn save(&mut self, mut round: SavedRound) -> &SavedRound {
        if round.timestamp.is_none() {
            round.timestamp = Some(Utc::now().timestamp_millis().to_string());
        }
        self.rounds.push(round);
        &self.rounds[self.rounds.len() - 1]
    }

    /// Matching rounds, newest first, at most `limit`.
    pub fn load(
        &self,
        player: Option<&str>,
        course: Option<&str>,
        limit: usize,
    ) -> Vec<SavedRound> {
        let mut rounds: Vec<SavedRound> = self
            .rounds
            .iter()
            .filter(|r| r.matches(player, course))
            .cloned()
            .collect();
        rounds.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        rounds.truncate(limit);
        rounds
    }

    /// Remove the round identified by `key`.
    /// Returns true if a round was removed.
    pub fn delete(&mut self, key: &RoundKey) -> bool {
        let before = self.rounds.len();
        let position = self.rounds.iter().position(|r| {
            r.player_name == key.player_name
                && r.course == key.course
                && r.date == key.date
                && (key.timestamp.is_none() || r.timestamp == key.timestamp)
        });
        if let Some(i) = position {
            self.rounds.remove(i);
        }
        self.rounds.len() < before
    }
}

/// Get the default round book path (~/.config/clubhouse/rounds.json)
pub fn get_round_book_path() -> PathBuf {
    crate::config::get_config_dir().join("rounds.json")
}

/// Load the round book from a JSON file
///
/// If the file doesn't exist, returns a new empty book.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_round_book(path: &Path) -> Result<RoundBook> {
    if !path.exists() {
        return Ok(RoundBook::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open round book at {}", path.display()))?;

    let book: RoundBook = serde_json::from_reader(file).context("Failed to load round book")?;

    if book.version != ROUND_BOOK_VERSION {
        anyhow::bail!("Unsupported round book version: {}", book.version);
    }

    Ok(book)
}

/// Save the round book to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_round_book(path: &Path, book: &RoundBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, book).context("Failed to serialize round book")?;

    file.commit().context("Failed to save round book")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::HOLES;
    use std::env;

    fn round(player: &str, course: &str, date: &str, points: u32) -> SavedRound {
        SavedRound {
            player_name: player.to_string(),
            course: course.to_string(),
            date: date.to_string(),
            handicap: 18,
            holes: [Some(4); HOLES],
            total_score: 72,
            total_points: points,
            out_score: 36,
            out_points: points / 2,
            in_score: 36,
            in_points: points - points / 2,
            timestamp: None,
        }
    }

    #[test]
    fn test_save_stamps_timestamp() {
        let mut book = RoundBook::new();
        let saved = book.save(round("Pat", "Trim", "2025-06-14", 36));
        assert!(saved.timestamp.is_some());
    }

    #[test]
    fn test_load_filters_and_orders_newest_first() {
        let mut book = RoundBook::new();
        book.save(round("Pat", "Trim", "2025-05-01", 30));
        book.save(round("Pat", "Ardee", "2025-06-14", 36));
        book.save(round("Sean", "Trim", "2025-07-01", 33));

        let pat = book.load(Some("pat"), None, 20);
        assert_eq!(pat.len(), 2);
        assert_eq!(pat[0].date, "2025-06-14");

        let trim = book.load(None, Some("Trim"), 1);
        assert_eq!(trim.len(), 1);
        assert_eq!(trim[0].player_name, "Sean");
    }

    #[test]
    fn test_delete_by_key() {
        let mut book = RoundBook::new();
        let saved = book.save(round("Pat", "Trim", "2025-05-01", 30)).clone();
        book.save(round("Pat", "Trim", "2025-05-01", 28));

        assert!(book.delete(&RoundKey::from(&saved)));
        assert_eq!(book.rounds.len(), 1);
        assert_eq!(book.rounds[0].total_points, 28);

        let missing = RoundKey {
            player_name: "Nobody".to_string(),
            course: "Trim".to_string(),
            date: "2025-05-01".to_string(),
            timestamp: None,
        };
        assert!(!book.delete(&missing));
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("clubhouse_test_rounds_missing.json");
        let _ = std::fs::remove_file(&temp_path);

        let book = load_round_book(&temp_path).unwrap();
        assert_eq!(book.version, 1);
        assert!(book.rounds.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("clubhouse_test_rounds_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut book = RoundBook::new();
        book.save(round("Pat", "Trim", "2025-05-01", 30));
        save_round_book(&temp_path, &book).unwrap();

        let loaded = load_round_book(&temp_path).unwrap();
        assert_eq!(loaded.rounds.len(), 1);
        assert_eq!(loaded.rounds[0], book.rounds[0]);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_version() {
        let temp_path = env::temp_dir().join("clubhouse_test_rounds_version.json");
        std::fs::write(&temp_path, r#"{"version": 2, "rounds": []}"#).unwrap();
        let err = load_round_book(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported round book version"));
        let _ = std::fs::remove_file(&temp_path);
    }
}
