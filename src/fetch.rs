use anyhow::Result;
use std::collections::HashMap;

use crate::course::{load_course_rows, validate_course, Course, CourseBook};
use crate::fixtures::{load_fixtures, Fixture};
use crate::handicaps::{latest_handicaps, HandicapEntry};
use crate::sheets::{
    fetch_tabs, records, SheetClient, COURSES_TAB, FIXTURES_TAB, HANDICAPS_TAB, LEAGUES_TAB,
};
use crate::standings::{process_leagues, Leagues, HEADER_ROWS};

/// Society data parsed from whichever tabs were fetched.
///
/// A tab that failed to download is None; commands decide whether that
/// is fatal for them.
#[derive(Debug, Default)]
pub struct SocietyData {
    pub leagues: Option<Leagues>,
    pub fixtures: Option<Vec<Fixture>>,
    pub handicaps: Option<Vec<HandicapEntry>>,
    pub courses: Option<Vec<Course>>,
}

impl SocietyData {
    /// Parse raw CSV rows keyed by tab name.
    pub fn from_tabs(mut tabs: HashMap<String, Vec<Vec<String>>>) -> Self {
        Self {
            leagues: tabs
                .remove(LEAGUES_TAB)
                .map(|rows| process_leagues(&rows, HEADER_ROWS)),
            fixtures: tabs
                .remove(FIXTURES_TAB)
                .map(|rows| load_fixtures(&records(rows))),
            handicaps: tabs
                .remove(HANDICAPS_TAB)
                .map(|rows| latest_handicaps(&records(rows))),
            courses: tabs.remove(COURSES_TAB).map(|rows| load_course_rows(&rows)),
        }
    }
}

/// Fetch the given tabs concurrently and parse them.
///
/// Fails only if every requested tab failed.
pub async fn fetch_society_data(client: &SheetClient, tabs: &[&str]) -> Result<SocietyData> {
    let fetched = fetch_tabs(client, tabs).await?;
    Ok(SocietyData::from_tabs(fetched))
}

/// Built-in courses, overridden and extended by the courses tab when one is
/// configured. A failed download leaves the built-in book as is.
pub async fn load_course_book(client: &SheetClient) -> CourseBook {
    let mut book = CourseBook::builtin();
    if !client.sheet().tabs.contains_key(COURSES_TAB) {
        return book;
    }

    match fetch_society_data(client, &[COURSES_TAB]).await {
        Ok(SocietyData {
            courses: Some(courses),
            ..
        }) => {
            tracing::info!("{} courses from the sheet", courses.len());
            for course in &courses {
                if let Err(problems) = validate_course(course) {
                    for problem in problems {
                        tracing::warn!("{}: {}", course.name, problem);
                    }
                }
            }
            book.extend(courses);
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("courses: {:#}, using built-in courses", e),
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::parse_rows;

    fn tab(text: &str) -> Vec<Vec<String>> {
        parse_rows(text)
    }

    #[test]
    fn test_from_tabs_parses_each_tab() {
        let mut tabs = HashMap::new();
        tabs.insert(
            LEAGUES_TAB.to_string(),
            tab(
                "Society League\nLeague 1,,,,,,,League 2\nName,P,W,L,+/-,Pts\nPat,3,2,1,4,6\n",
            ),
        );
        tabs.insert(
            FIXTURES_TAB.to_string(),
            tab("Game Week,Player A,Player B,Result\n1,Pat,Sean,\n"),
        );
        tabs.insert(
            HANDICAPS_TAB.to_string(),
            tab("Player Name,Handicap,Handicap Date\nPat,14,2025-03-01\n"),
        );

        let data = SocietyData::from_tabs(tabs);
        assert_eq!(data.leagues.unwrap().league_one[0].name, "Pat");
        assert_eq!(data.fixtures.unwrap()[0].player_b, "Sean");
        assert_eq!(data.handicaps.unwrap()[0].handicap, "14");
        assert!(data.courses.is_none());
    }

    #[test]
    fn test_from_tabs_missing_tabs_are_none() {
        let data = SocietyData::from_tabs(HashMap::new());
        assert!(data.leagues.is_none());
        assert!(data.fixtures.is_none());
        assert!(data.handicaps.is_none());
    }

    #[test]
    fn test_from_tabs_courses() {
        let pars = vec!["4"; 18].join(",");
        let indexes = (1..=18).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let mut tabs = HashMap::new();
        tabs.insert(
            COURSES_TAB.to_string(),
            tab(&format!("course,Home,{},{}\n", pars, indexes)),
        );
        let courses = SocietyData::from_tabs(tabs).courses.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].total_par(), 72);
    }
}
