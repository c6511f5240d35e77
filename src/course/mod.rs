pub mod catalog;
pub mod loader;
pub mod validation;

pub use loader::load_course_rows;
pub use validation::validate_course;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of holes on every course the society plays.
pub const HOLES: usize = 18;

/// Holes 1-9 are "out", holes 10-18 are "in".
pub const FRONT_NINE: usize = 9;

/// Course played when nothing else is selected.
pub const DEFAULT_COURSE: &str = "Millicent";

/// A course: per-hole par and stroke index.
///
/// `indexes` is expected to be a permutation of 1..=18 (1 = hardest hole).
/// The scorer does not check this; see [`validate_course`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub pars: [u8; HOLES],
    pub indexes: [u8; HOLES],
}

impl Course {
    pub fn new(name: impl Into<String>, pars: [u8; HOLES], indexes: [u8; HOLES]) -> Self {
        Self {
            name: name.into(),
            pars,
            indexes,
        }
    }

    /// Par for holes 1-9
    pub fn out_par(&self) -> u32 {
        self.pars[..FRONT_NINE].iter().map(|&p| p as u32).sum()
    }

    /// Par for holes 10-18
    pub fn in_par(&self) -> u32 {
        self.pars[FRONT_NINE..].iter().map(|&p| p as u32).sum()
    }

    pub fn total_par(&self) -> u32 {
        self.out_par() + self.in_par()
    }
}

/// Name-ordered collection of courses.
#[derive(Debug, Clone, Default)]
pub struct CourseBook {
    courses: BTreeMap<String, Course>,
}

impl CourseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The courses the society has played, bundled with the binary.
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for course in catalog::builtin_courses() {
            book.insert(course);
        }
        book
    }

    /// Insert a course, replacing any course with the same name.
    /// Returns true if an existing course was replaced.
    pub fn insert(&mut self, course: Course) -> bool {
        self.courses.insert(course.name.clone(), course).is_some()
    }

    /// Merge courses from another source. Incoming courses win on name clashes.
    pub fn extend(&mut self, courses: impl IntoIterator<Item = Course>) {
        for course in courses {
            if self.insert(course) {
                tracing::debug!("sheet course overrides built-in entry");
            }
        }
    }

    /// Look a course up by exact name, then case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Course> {
        let name = name.trim();
        self.courses.get(name).or_else(|| {
            self.courses
                .values()
                .find(|c| c.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
