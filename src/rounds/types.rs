use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::course::HOLES;
use crate::scoring::{entered_holes, RoundSummary};

/// A round as stored by the saved-scores API.
///
/// Field names follow the API's camelCase JSON. Unrecorded holes are null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRound {
    pub player_name: String,
    pub course: String,
    /// ISO date the round was played; the API may append a time
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub handicap: u32,
    #[serde(deserialize_with = "deserialize_holes")]
    pub holes: [Option<u8>; HOLES],
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_score: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_points: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub out_score: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub out_points: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub in_score: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub in_points: u32,
    /// Set by whoever stores the round; identifies it for deletion
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

/// A whole number sent as a number or numeric text. Anything else,
/// negative values included, reads as None.
fn lenient_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Holes come back from the API as numbers, numeric strings, "" or null.
fn deserialize_holes<'de, D>(
    deserializer: D,
) -> std::result::Result<[Option<u8>; HOLES], D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    let mut holes = [None; HOLES];
    for (slot, value) in holes.iter_mut().zip(raw) {
        *slot = lenient_number(&value)
            .and_then(|n| u8::try_from(n).ok())
            .filter(|&n| n != 0);
    }
    Ok(holes)
}

/// Handicaps and totals, read as leniently as holes: unreadable values are 0
/// so one odd record does not sink a whole listing.
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(0))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl SavedRound {
    /// Build a record for saving, checking what the scorecard requires
    /// before a round can be kept: a player name, a course, a handicap and at
    /// least one scored hole.
    pub fn from_summary(
        player_name: &str,
        course: &str,
        handicap: u32,
        strokes: &[u8; HOLES],
        summary: &RoundSummary,
    ) -> Result<Self> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            bail!("Please enter your name (--player)");
        }
        if course.trim().is_empty() {
            bail!("Please select a course");
        }
        if handicap == 0 {
            bail!("Please enter your handicap");
        }
        if entered_holes(strokes) == 0 {
            bail!("Please enter at least one hole score");
        }

        let mut holes = [None; HOLES];
        for (slot, &s) in holes.iter_mut().zip(strokes.iter()) {
            *slot = (s != 0).then_some(s);
        }

        Ok(Self {
            player_name: player_name.to_string(),
            course: course.to_string(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            handicap,
            holes,
            total_score: summary.total_score,
            total_points: summary.total_points,
            out_score: summary.out_score,
            out_points: summary.out_points,
            in_score: summary.in_score,
            in_points: summary.in_points,
            timestamp: None,
        })
    }

    /// Calendar day of the round, if the stored date is readable.
    pub fn played_on(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Raw strokes with the 0 sentinel for unrecorded holes, ready to rescore.
    pub fn strokes(&self) -> [u8; HOLES] {
        let mut strokes = [0u8; HOLES];
        for (slot, hole) in strokes.iter_mut().zip(self.holes.iter()) {
            *slot = hole.unwrap_or(0);
        }
        strokes
    }

    /// Whether this round matches optional player/course filters
    /// (case-insensitive, empty filter matches everything).
    pub fn matches(&self, player: Option<&str>, course: Option<&str>) -> bool {
        let matches_field = |value: &str, filter: Option<&str>| match filter {
            Some(f) if !f.trim().is_empty() => value.eq_ignore_ascii_case(f.trim()),
            _ => true,
        };
        matches_field(&self.player_name, player) && matches_field(&self.course, course)
    }
}
