pub mod formatter;
pub mod tables;

pub use formatter::{
    format_course_detail, format_course_list, format_saved_rounds, format_scorecard, pad_left,
    pad_right, should_use_colors, truncate_name,
};
pub use tables::{
    format_fixtures, format_handicaps, format_knockout, format_leaders, format_results,
    format_standings,
};
