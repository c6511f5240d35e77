use owo_colors::OwoColorize;

use super::formatter::{get_terminal_width, pad_left, pad_right, truncate_name};
use crate::fixtures::{
    group_by_week, knockout_round, week_label, Fixture, MatchResult, KNOCKOUT_ROUNDS,
};
use crate::handicaps::HandicapEntry;
use crate::standings::RankedPlayer;

/// Width of the name column in league tables.
const NAME_WIDTH: usize = 16;

/// Space taken by the "  V  " or " [3-1] " between fixture names.
const VERSUS_WIDTH: usize = 7;

fn standings_row(cells: [String; 7]) -> String {
    let [rank, name, played, won, lost, plus_minus, points] = cells;
    [
        pad_left(&rank, 2),
        pad_right(&name, NAME_WIDTH),
        pad_left(&played, 2),
        pad_left(&won, 2),
        pad_left(&lost, 2),
        pad_left(&plus_minus, 3),
        pad_left(&points, 3),
    ]
    .join(" ")
}

/// A league table: rank, name, P, W, L, +/-, Pts.
pub fn format_standings(title: &str, league: &[RankedPlayer], use_colors: bool) -> String {
    let mut lines = Vec::new();
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }

    if league.is_empty() {
        lines.push("No players.".to_string());
        return lines.join("\n");
    }

    let header = standings_row(["#", "Player Name", "P", "W", "L", "+/-", "Pts"].map(String::from));
    lines.push(header.clone());
    lines.push("-".repeat(header.len()));

    for ranked in league {
        let p = &ranked.player;
        lines.push(standings_row([
            ranked.rank.to_string(),
            truncate_name(&p.name, NAME_WIDTH),
            p.played.clone(),
            p.won.clone(),
            p.lost.clone(),
            p.plus_minus.clone(),
            p.points.clone(),
        ]));
    }
    lines.join("\n")
}

pub fn format_leaders(league_one: &str, league_two: &str) -> String {
    format!("League 1 leader: {}\nLeague 2 leader: {}", league_one, league_two)
}

/// Widest player name among `fixtures`, capped so a match fits the terminal.
fn fixture_name_width(fixtures: &[Fixture], terminal_width: Option<usize>) -> usize {
    let widest = fixtures
        .iter()
        .flat_map(|f| [&f.player_a, &f.player_b])
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    match terminal_width {
        Some(width) if width > VERSUS_WIDTH => widest.min((width - VERSUS_WIDTH) / 2).max(1),
        _ => widest,
    }
}

fn format_match(fixture: &Fixture, name_width: usize, use_colors: bool) -> String {
    let mut player_a = pad_left(&truncate_name(&fixture.player_a, name_width), name_width);
    let mut player_b = pad_right(&truncate_name(&fixture.player_b, name_width), name_width);

    if use_colors {
        match fixture.match_result() {
            Some(MatchResult::PlayerA) => player_a = player_a.bold().to_string(),
            Some(MatchResult::PlayerB) => player_b = player_b.bold().to_string(),
            _ => {}
        }
    }

    let middle = match &fixture.result {
        Some(result) => format!(" [{}] ", result),
        None => "  V  ".to_string(),
    };
    format!("{}{}{}", player_a, middle, player_b).trim_end().to_string()
}

fn format_weeks(fixtures: &[Fixture], empty: &str, use_colors: bool) -> String {
    if fixtures.is_empty() {
        return empty.to_string();
    }
    let name_width = fixture_name_width(fixtures, get_terminal_width());

    group_by_week(fixtures)
        .iter()
        .map(|(week, matches)| {
            let label = week_label(week);
            let heading = if use_colors {
                label.bold().to_string()
            } else {
                label
            };
            let body: Vec<String> = matches
                .iter()
                .map(|f| format_match(f, name_width, use_colors))
                .collect();
            format!("{}\n{}", heading, body.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Matches still to play, grouped by game week.
pub fn format_fixtures(upcoming: &[Fixture], use_colors: bool) -> String {
    format_weeks(upcoming, "No upcoming fixtures.", use_colors)
}

/// Played matches grouped by game week, winners in bold.
pub fn format_results(results: &[Fixture], use_colors: bool) -> String {
    format_weeks(results, "No results yet.", use_colors)
}

/// The knockout rounds in playing order, each listed even when empty.
pub fn format_knockout(fixtures: &[Fixture], use_colors: bool) -> String {
    let knockout: Vec<Fixture> = KNOCKOUT_ROUNDS
        .iter()
        .flat_map(|(code, _)| knockout_round(fixtures, code))
        .collect();
    let name_width = fixture_name_width(&knockout, get_terminal_width());

    KNOCKOUT_ROUNDS
        .iter()
        .map(|(code, name)| {
            let heading = if use_colors {
                name.bold().to_string()
            } else {
                name.to_string()
            };
            let matches = knockout_round(fixtures, code);
            let body = if matches.is_empty() {
                "(No fixtures yet)".to_string()
            } else {
                matches
                    .iter()
                    .map(|f| format_match(f, name_width, use_colors))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            format!("{}\n{}", heading, body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Current handicaps, one player per line.
pub fn format_handicaps(entries: &[HandicapEntry]) -> String {
    if entries.is_empty() {
        return "No handicaps published.".to_string();
    }
    let width = entries
        .iter()
        .map(|e| e.player.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut lines = vec![format!(
        "{}  {}  {}",
        pad_right("Player", width),
        pad_left("Hcp", 4),
        "Date"
    )];
    for entry in entries {
        let date = entry
            .date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| entry.date_text.clone());
        lines.push(format!(
            "{}  {}  {}",
            pad_right(&entry.player, width),
            pad_left(&entry.handicap, 4),
            date
        ));
    }
    lines.join("\n")
}
