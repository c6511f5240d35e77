use clubhouse::course::{CourseBook, HOLES};
use clubhouse::output::format_scorecard;
use clubhouse::rounds::{RoundBook, RoundKey, SavedRound};
use clubhouse::scoring::{parse_strokes, score_round};

const ROUND: &str = "5,4,5,6,4,5,5,5,3,5,5,4,4,6,5,5,5,5";

#[test]
fn test_full_round_at_ardee() {
    let courses = CourseBook::builtin();
    let course = courses.get("ardee").unwrap();
    let strokes = parse_strokes(ROUND).unwrap();

    let summary = score_round(course, 14, &strokes);
    assert_eq!(summary.out_score, 42);
    assert_eq!(summary.out_points, 18);
    assert_eq!(summary.in_score, 44);
    assert_eq!(summary.in_points, 17);
    assert_eq!(summary.total_score, 86);
    assert_eq!(summary.total_points, 35);
    assert_eq!(summary.total_par, 71);

    let received: u32 = summary.holes.iter().map(|h| h.strokes_received).sum();
    assert_eq!(received, 14);
}

#[test]
fn test_partial_round_skips_unrecorded_holes() {
    let courses = CourseBook::builtin();
    let course = courses.get("Ardee").unwrap();
    let strokes = parse_strokes("5,4,5,-,4,5,5,5,3,5,5,4,4,6,5,5,5,x").unwrap();

    let summary = score_round(course, 14, &strokes);
    assert_eq!(summary.holes[3].points, 0);
    assert_eq!(summary.holes[17].points, 0);
    assert_eq!(summary.total_score, 75);
    assert_eq!(summary.total_points, 32);
}

#[test]
fn test_no_handicap_scores_nothing() {
    let courses = CourseBook::builtin();
    let course = courses.get("Ardee").unwrap();
    let strokes = parse_strokes(ROUND).unwrap();

    let summary = score_round(course, 0, &strokes);
    assert!(summary.is_empty());
    assert_eq!(summary.total_par, 0);
}

#[test]
fn test_high_scores_floor_at_zero() {
    let courses = CourseBook::builtin();
    let course = courses.get("Ardee").unwrap();
    let summary = score_round(course, 36, &[9; HOLES]);
    assert_eq!(summary.total_score, 162);
    assert_eq!(summary.total_points, 0);
    assert!(summary.holes.iter().all(|h| h.strokes_received == 2));
}

#[test]
fn test_scored_round_saved_locally_and_rendered() {
    let courses = CourseBook::builtin();
    let course = courses.get("Ardee").unwrap();
    let strokes = parse_strokes(ROUND).unwrap();
    let summary = score_round(course, 14, &strokes);

    let card = format_scorecard(course, 14, &strokes, &summary, false);
    assert!(card.lines().last().unwrap().ends_with("35"));

    let round = SavedRound::from_summary("Pat", &course.name, 14, &strokes, &summary).unwrap();
    let mut book = RoundBook::new();
    let key = RoundKey::from(book.save(round));

    let loaded = book.load(Some("Pat"), Some("Ardee"), 20);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].strokes(), strokes);
    assert_eq!(score_round(course, loaded[0].handicap, &loaded[0].strokes()), summary);

    assert!(book.delete(&key));
    assert!(book.load(None, None, 20).is_empty());
}
