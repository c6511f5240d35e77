use chrono::NaiveDate;
use std::collections::HashMap;

use crate::sheets::{field, Record};

/// Date layouts seen in the handicaps tab, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d %b %Y", "%d-%b-%Y"];

/// A player's handicap as of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandicapEntry {
    pub player: String,
    pub handicap: String,
    pub date_text: String,
    pub date: Option<NaiveDate>,
}

impl HandicapEntry {
    /// Rows need a name, a handicap and a date to count.
    pub fn from_record(record: &Record) -> Option<Self> {
        let player = field(record, "Player Name").trim();
        let handicap = field(record, "Handicap").trim();
        let date_text = field(record, "Handicap Date").trim();
        if player.is_empty() || handicap.is_empty() || date_text.is_empty() {
            return None;
        }
        Some(Self {
            player: player.to_string(),
            handicap: handicap.to_string(),
            date_text: date_text.to_string(),
            date: parse_date(date_text),
        })
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text.trim(), format).ok())
}

/// Most recent handicap for each player, sorted by name.
///
/// A dated entry replaces an older or undated one; when dates are equal the
/// entry seen first is kept.
pub fn latest_handicaps(records: &[Record]) -> Vec<HandicapEntry> {
    let mut latest: HashMap<String, HandicapEntry> = HashMap::new();

    for entry in records.iter().filter_map(HandicapEntry::from_record) {
        if entry.date.is_none() {
            tracing::warn!(
                "{}: unreadable handicap date '{}'",
                entry.player,
                entry.date_text
            );
        }
        match latest.get(&entry.player) {
            Some(current) if entry.date <= current.date => {}
            _ => {
                latest.insert(entry.player.clone(), entry);
            }
        }
    }

    let mut players: Vec<HandicapEntry> = latest.into_values().collect();
    players.sort_by(|a, b| {
        a.player
            .to_lowercase()
            .cmp(&b.player.to_lowercase())
            .then_with(|| a.player.cmp(&b.player))
    });
    players
}
