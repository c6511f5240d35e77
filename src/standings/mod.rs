//! League standings: reading the two side-by-side league tables from the
//! standings tab, ordering them and assigning display ranks.

pub mod ranking;

pub use ranking::{league_leader, rank, sort_league, RankedPlayer};

/// Title rows above the first player on the standings tab.
pub const HEADER_ROWS: usize = 3;

/// First column of each league's block on the standings tab.
const LEAGUE_ONE_COLUMN: usize = 0;
const LEAGUE_TWO_COLUMN: usize = 7;

/// One row of a league table, as published.
///
/// The numeric columns are kept as the sheet text so they print exactly as
/// entered; comparisons parse them on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaguePlayer {
    pub name: String,
    pub played: String,
    pub won: String,
    pub lost: String,
    pub plus_minus: String,
    pub points: String,
}

impl LeaguePlayer {
    /// Points as a number; unreadable values sort below every number
    pub fn points_value(&self) -> Option<i64> {
        to_int(&self.points)
    }

    /// Plus/minus as a number; unreadable values sort below every number
    pub fn plus_minus_value(&self) -> Option<i64> {
        to_int(&self.plus_minus)
    }
}

/// Both leagues from the standings tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leagues {
    pub league_one: Vec<LeaguePlayer>,
    pub league_two: Vec<LeaguePlayer>,
}

/// Parse a leading integer the way spreadsheet text is usually read:
/// surrounding whitespace and trailing junk are ignored ("+5", "12 pts").
pub fn to_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let digits_start = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[digits_start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..digits_start + digits_len].parse().ok()
}

/// Split the standings tab into its two leagues.
///
/// Rows before `start_row` are titles. League one is read from columns 0-5
/// and league two from columns 7-12 (name, P, W, L, +/-, Pts). A row adds a
/// player to a league only if that league's name cell is non-blank.
pub fn process_leagues(rows: &[Vec<String>], start_row: usize) -> Leagues {
    let mut leagues = Leagues::default();
    for row in rows.iter().skip(start_row) {
        if let Some(player) = read_player(row, LEAGUE_ONE_COLUMN) {
            leagues.league_one.push(player);
        }
        if let Some(player) = read_player(row, LEAGUE_TWO_COLUMN) {
            leagues.league_two.push(player);
        }
    }
    leagues
}

fn read_player(row: &[String], first: usize) -> Option<LeaguePlayer> {
    let cell = |offset: usize| -> String {
        row.get(first + offset).cloned().unwrap_or_default()
    };

    let name = cell(0).trim().to_string();
    if name.is_empty() {
        return None;
    }

    Some(LeaguePlayer {
        name,
        played: cell(1),
        won: cell(2),
        lost: cell(3),
        plus_minus: cell(4),
        points: cell(5),
    })
}
