use crate::sheets::{field, Record};

/// Knockout rounds in the order they are played, with display names.
pub const KNOCKOUT_ROUNDS: [(&str, &str); 5] = [
    ("CS", "Championship Semis"),
    ("CF", "Championship Final"),
    ("PQ", "Plate Quarters"),
    ("PS", "Plate Semis"),
    ("PF", "Plate Final"),
];

/// A match from the fixtures tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub game_week: String,
    pub player_a: String,
    pub player_b: String,
    /// Score line such as "3-1"; None until the match is played
    pub result: Option<String>,
}

impl Fixture {
    /// Build from a fixtures-tab record. Rows without a game week or either
    /// player are not fixtures.
    pub fn from_record(record: &Record) -> Option<Self> {
        let game_week = field(record, "Game Week").trim();
        let player_a = field(record, "Player A").trim();
        let player_b = field(record, "Player B").trim();
        if game_week.is_empty() || player_a.is_empty() || player_b.is_empty() {
            return None;
        }

        let result = field(record, "Result").trim();
        Some(Self {
            game_week: game_week.to_string(),
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
            result: (!result.is_empty()).then(|| result.to_string()),
        })
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn match_result(&self) -> Option<MatchResult> {
        self.result.as_deref().and_then(MatchResult::parse)
    }
}

/// Read every fixture from the tab's records.
pub fn load_fixtures(records: &[Record]) -> Vec<Fixture> {
    records.iter().filter_map(Fixture::from_record).collect()
}

/// Matches still to be played.
pub fn upcoming(fixtures: &[Fixture]) -> Vec<Fixture> {
    fixtures.iter().filter(|f| !f.is_played()).cloned().collect()
}

/// Matches with a result.
pub fn results(fixtures: &[Fixture]) -> Vec<Fixture> {
    fixtures.iter().filter(|f| f.is_played()).cloned().collect()
}

/// Group matches by game week, weeks in order of first appearance.
pub fn group_by_week(fixtures: &[Fixture]) -> Vec<(String, Vec<Fixture>)> {
    let mut groups: Vec<(String, Vec<Fixture>)> = Vec::new();
    for fixture in fixtures {
        match groups.iter_mut().find(|(week, _)| *week == fixture.game_week) {
            Some((_, matches)) => matches.push(fixture.clone()),
            None => groups.push((fixture.game_week.clone(), vec![fixture.clone()])),
        }
    }
    groups
}

/// Heading for a game week: "Game Week 3" for numbered weeks, the round
/// name for knockout codes, the raw text otherwise.
pub fn week_label(week: &str) -> String {
    let week = week.trim();
    if week.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("Game Week {}", week);
    }
    KNOCKOUT_ROUNDS
        .iter()
        .find(|(code, _)| *code == week)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| week.to_string())
}

/// Matches of one knockout round, matched on the code case-insensitively.
pub fn knockout_round(fixtures: &[Fixture], code: &str) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|f| f.game_week.trim().eq_ignore_ascii_case(code))
        .cloned()
        .collect()
}

/// Who won a played match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    PlayerA,
    PlayerB,
    Halved,
}

impl MatchResult {
    /// Parse "a-b". Anything that is not two numbers gives None.
    pub fn parse(score: &str) -> Option<Self> {
        let (a, b) = score.split_once('-')?;
        let a: i64 = a.trim().parse().ok()?;
        let b: i64 = b.trim().parse().ok()?;
        Some(match a.cmp(&b) {
            std::cmp::Ordering::Greater => MatchResult::PlayerA,
            std::cmp::Ordering::Less => MatchResult::PlayerB,
            std::cmp::Ordering::Equal => MatchResult::Halved,
        })
    }
}
