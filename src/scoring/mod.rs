pub mod engine;
pub mod input;

pub use engine::{allocate_strokes, points_for_hole, score_round, HoleResult, RoundSummary};
pub use input::{entered_holes, parse_strokes};
