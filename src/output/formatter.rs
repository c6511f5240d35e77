use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::course::{Course, CourseBook, FRONT_NINE, HOLES};
use crate::rounds::SavedRound;
use crate::scoring::RoundSummary;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub(crate) fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

pub fn pad_left(text: &str, width: usize) -> String {
    format!("{:>width$}", text.trim(), width = width)
}

pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text.trim(), width = width)
}

/// Shorten a name to `max_len` characters, marking the cut with "..".
pub fn truncate_name(name: &str, max_len: usize) -> String {
    let name = name.trim();
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        name.to_string()
    } else {
        let keep = max_len.saturating_sub(2);
        format!("{}..", chars[..keep].iter().collect::<String>())
    }
}

fn hole_strokes(strokes: u8) -> String {
    if strokes == 0 {
        "-".to_string()
    } else {
        strokes.to_string()
    }
}

fn scorecard_row(cells: [String; 6]) -> String {
    let widths = [4, 4, 4, 8, 6, 5];
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_left(cell, width))
        .collect::<Vec<_>>()
        .join("")
}

/// Format a scored round as a hole-by-hole card with OUT/IN/TOTAL rows.
pub fn format_scorecard(
    course: &Course,
    handicap: u32,
    strokes: &[u8; HOLES],
    summary: &RoundSummary,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = format!("{}  (Par {})  Handicap {}", course.name, course.total_par(), handicap);
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }

    let header = scorecard_row(["Hole", "Par", "SI", "Strokes", "Shots", "Pts"].map(String::from));
    lines.push(header.clone());
    lines.push("-".repeat(header.len()));

    for hole in 0..HOLES {
        let result = summary.holes[hole];
        let row = scorecard_row([
            (hole + 1).to_string(),
            course.pars[hole].to_string(),
            course.indexes[hole].to_string(),
            hole_strokes(strokes[hole]),
            result.strokes_received.to_string(),
            result.points.to_string(),
        ]);
        if use_colors && result.points >= 3 {
            lines.push(row.green().to_string());
        } else if use_colors && strokes[hole] != 0 && result.points == 0 {
            lines.push(row.red().to_string());
        } else {
            lines.push(row);
        }

        if hole + 1 == FRONT_NINE {
            lines.push(total_row("OUT", summary.out_par, summary.out_score, summary.out_points));
            lines.push(String::new());
        }
    }

    lines.push(total_row("IN", summary.in_par, summary.in_score, summary.in_points));
    lines.push("-".repeat(header.len()));
    let total = total_row(
        "TOT",
        summary.total_par,
        summary.total_score,
        summary.total_points,
    );
    if use_colors {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }

    if summary.is_empty() {
        lines.push(String::new());
        lines.push("No handicap entered: totals stay at zero.".to_string());
    }

    lines.join("\n")
}

fn total_row(label: &str, par: u32, score: u32, points: u32) -> String {
    scorecard_row([
        label.to_string(),
        par.to_string(),
        String::new(),
        score.to_string(),
        String::new(),
        points.to_string(),
    ])
}

/// One line per course: name and par.
pub fn format_course_list(courses: &CourseBook, default_course: &str) -> String {
    if courses.is_empty() {
        return "No courses available.".to_string();
    }
    let width = courses.names().map(|n| n.chars().count()).max().unwrap_or(0);
    courses
        .iter()
        .map(|c| {
            let marker = if c.name == default_course { " (default)" } else { "" };
            format!(
                "{}  Par {} (out {}, in {}){}",
                pad_right(&c.name, width),
                c.total_par(),
                c.out_par(),
                c.in_par(),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Par and stroke index for every hole of one course.
pub fn format_course_detail(course: &Course) -> String {
    let holes: Vec<String> = (1..=HOLES).map(|h| pad_left(&h.to_string(), 3)).collect();
    let pars: Vec<String> = course.pars.iter().map(|p| pad_left(&p.to_string(), 3)).collect();
    let indexes: Vec<String> = course
        .indexes
        .iter()
        .map(|i| pad_left(&i.to_string(), 3))
        .collect();

    format!(
        "{}  Par {}\nHole {}\nPar  {}\nSI   {}",
        course.name,
        course.total_par(),
        holes.join(""),
        pars.join(""),
        indexes.join("")
    )
}

/// Saved rounds, one per line, 1-based so an entry can be picked by number.
pub fn format_saved_rounds(rounds: &[SavedRound], use_colors: bool) -> String {
    if rounds.is_empty() {
        return "No saved scores found".to_string();
    }
    rounds
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let date = round
                .played_on()
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| round.date.clone());
            let index = format!("{:>2}.", i + 1);
            let course = if use_colors {
                round.course.bold().to_string()
            } else {
                round.course.clone()
            };
            format!(
                "{} {} - {}  {}  Score: {} | Points: {}",
                index, course, date, round.player_name, round.total_score, round.total_points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_round;

    fn ardee() -> Course {
        CourseBook::builtin().get("Ardee").unwrap().clone()
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("Al", 4), "Al  ");
        assert_eq!(pad_left("1234", 2), "1234");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Pat Murphy", 16), "Pat Murphy");
    }

    #[test]
    fn test_truncate_name_exact() {
        assert_eq!(truncate_name("Sixteen chars ok", 16), "Sixteen chars ok");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("Bartholomew O'Sullivan", 16), "Bartholomew O'..");
    }

    #[test]
    fn test_truncate_name_unicode() {
        assert_eq!(truncate_name("Seán Ó Briain-Fitzgerald", 16), "Seán Ó Briain-..");
    }

    #[test]
    fn test_scorecard_contains_totals() {
        let course = ardee();
        let summary = score_round(&course, 18, &course.pars);
        let card = format_scorecard(&course, 18, &course.pars, &summary, false);
        let lines: Vec<&str> = card.lines().collect();
        assert!(lines[0].starts_with("Ardee  (Par 71)  Handicap 18"));
        assert!(lines.contains(&total_row("OUT", 35, 35, 27).as_str()));
        assert!(lines.last().unwrap().ends_with("54"));
        assert!(!card.contains("No handicap entered"));
    }

    #[test]
    fn test_scorecard_unrecorded_hole() {
        let course = ardee();
        let mut strokes = [0u8; HOLES];
        strokes[0] = 5;
        let summary = score_round(&course, 9, &strokes);
        let card = format_scorecard(&course, 9, &strokes, &summary, false);
        // Hole 2 is unrecorded: stroke column shows a dash
        assert!(card.contains("   2   3  14       -     0    0"));
    }

    #[test]
    fn test_scorecard_without_handicap() {
        let course = ardee();
        let summary = score_round(&course, 0, &course.pars);
        let card = format_scorecard(&course, 0, &course.pars, &summary, false);
        assert!(card.contains("No handicap entered"));
    }

    #[test]
    fn test_course_list_marks_default() {
        let book = CourseBook::builtin();
        let list = format_course_list(&book, "Millicent");
        assert_eq!(list.lines().count(), 27);
        assert!(list.lines().any(|l| l.starts_with("Millicent") && l.ends_with("(default)")));
    }

    #[test]
    fn test_course_detail() {
        let detail = format_course_detail(&ardee());
        assert!(detail.starts_with("Ardee  Par 71"));
        assert!(detail.contains("SI     8 14  4 18"));
    }

    #[test]
    fn test_saved_rounds_empty() {
        assert_eq!(format_saved_rounds(&[], false), "No saved scores found");
    }

    #[test]
    fn test_saved_rounds_line() {
        let round = SavedRound {
            player_name: "Pat".to_string(),
            course: "Trim".to_string(),
            date: "2025-06-14".to_string(),
            handicap: 18,
            holes: [Some(4); HOLES],
            total_score: 72,
            total_points: 36,
            out_score: 36,
            out_points: 18,
            in_score: 36,
            in_points: 18,
            timestamp: None,
        };
        let text = format_saved_rounds(&[round], false);
        assert_eq!(text, " 1. Trim - 14/06/2025  Pat  Score: 72 | Points: 36");
    }
}
