use super::{Course, HOLES};

type CourseRow = (&'static str, [u8; HOLES], [u8; HOLES]);

#[rustfmt::skip]
const COURSES: &[CourseRow] = &[
    ("Ardee",
        [4, 3, 4, 5, 4, 4, 4, 4, 3, 4, 4, 4, 3, 5, 4, 4, 4, 4],
        [8, 14, 4, 18, 2, 12, 10, 6, 16, 9, 15, 5, 17, 1, 11, 13, 7, 3]),
    ("DonabateYR",
        [3, 5, 4, 3, 4, 5, 4, 3, 5, 4, 3, 4, 4, 4, 4, 4, 5, 4],
        [9, 7, 3, 17, 1, 5, 15, 13, 11, 4, 10, 16, 6, 12, 8, 18, 14, 2]),
    ("DeerPark",
        [4, 3, 4, 4, 4, 3, 5, 4, 5, 4, 3, 4, 4, 5, 3, 4, 4, 5],
        [10, 2, 14, 16, 9, 18, 5, 6, 12, 1, 15, 11, 17, 8, 13, 7, 4, 3]),
    ("Balcarrick",
        [4, 4, 4, 4, 3, 5, 3, 5, 4, 4, 4, 4, 4, 4, 5, 3, 5, 4],
        [17, 7, 3, 13, 11, 5, 15, 9, 1, 18, 2, 12, 10, 4, 8, 16, 14, 6]),
    ("Elmgreen",
        [4, 5, 4, 4, 3, 4, 3, 4, 4, 4, 3, 4, 4, 4, 4, 5, 3, 4],
        [3, 11, 15, 5, 13, 17, 9, 7, 1, 10, 18, 12, 2, 8, 14, 4, 16, 6]),
    ("HeadfortNew",
        [4, 5, 4, 3, 4, 5, 3, 4, 4, 4, 3, 4, 4, 5, 4, 5, 3, 4],
        [6, 18, 10, 14, 2, 8, 16, 4, 12, 9, 11, 5, 1, 15, 3, 17, 13, 7]),
    ("HeadfortOld",
        [5, 3, 4, 5, 4, 4, 5, 3, 4, 3, 5, 4, 4, 3, 4, 4, 4, 4],
        [17, 12, 5, 8, 1, 3, 18, 14, 10, 16, 13, 4, 6, 11, 15, 2, 7, 9]),
    ("HollywoodLakes",
        [4, 4, 4, 3, 5, 3, 4, 4, 5, 4, 3, 4, 4, 5, 5, 4, 3, 4],
        [8, 4, 12, 14, 18, 10, 2, 6, 16, 3, 11, 17, 9, 1, 15, 5, 13, 7]),
    ("KilkeaCastle",
        [4, 5, 4, 3, 5, 3, 4, 4, 4, 3, 4, 5, 4, 3, 4, 3, 4, 4],
        [11, 4, 12, 6, 13, 18, 2, 3, 15, 17, 10, 14, 8, 16, 7, 5, 1, 9]),
    ("Killeen",
        [5, 4, 4, 4, 4, 3, 4, 3, 5, 5, 4, 4, 4, 3, 4, 5, 4, 3],
        [14, 4, 12, 8, 2, 16, 6, 18, 10, 15, 7, 3, 11, 9, 1, 17, 5, 13]),
    ("KilleenCastle",
        [4, 5, 4, 4, 4, 3, 5, 3, 4, 4, 4, 5, 4, 3, 5, 3, 4, 4],
        [3, 9, 12, 13, 4, 11, 15, 17, 1, 5, 7, 16, 8, 14, 18, 10, 6, 2]),
    ("Moyvalley",
        [4, 3, 4, 4, 3, 5, 4, 5, 4, 4, 4, 4, 5, 3, 4, 4, 3, 5],
        [10, 16, 4, 8, 18, 6, 2, 14, 12, 15, 7, 5, 9, 13, 17, 3, 11, 1]),
    ("Newbridge",
        [5, 4, 3, 5, 4, 3, 4, 4, 5, 4, 3, 4, 4, 3, 4, 4, 4, 5],
        [16, 10, 12, 6, 8, 18, 2, 4, 14, 1, 11, 17, 3, 9, 13, 7, 5, 15]),
    ("Roganstown",
        [4, 3, 4, 5, 5, 3, 4, 4, 3, 5, 4, 3, 4, 4, 4, 4, 3, 5],
        [4, 18, 6, 16, 14, 8, 2, 10, 12, 11, 7, 15, 1, 13, 9, 3, 17, 5]),
    ("Rosslare",
        [4, 3, 5, 4, 4, 4, 5, 3, 4, 3, 4, 5, 4, 3, 4, 4, 4, 5],
        [10, 9, 14, 8, 2, 13, 6, 12, 3, 11, 1, 17, 16, 15, 7, 5, 4, 18]),
    ("Sillogue",
        [4, 3, 5, 4, 5, 4, 3, 4, 3, 4, 4, 5, 3, 4, 4, 4, 4, 4],
        [4, 10, 7, 12, 5, 16, 15, 1, 17, 2, 8, 3, 13, 14, 11, 9, 18, 6]),
    ("RoyalCurragh",
        [5, 4, 4, 3, 4, 4, 5, 4, 4, 4, 3, 5, 5, 3, 4, 3, 4, 4],
        [14, 6, 17, 4, 16, 8, 12, 3, 10, 7, 13, 5, 2, 15, 11, 18, 1, 9]),
    ("Rathcore",
        [5, 4, 4, 3, 4, 4, 4, 4, 3, 5, 3, 4, 5, 4, 4, 3, 4, 5],
        [5, 9, 7, 11, 3, 17, 15, 1, 13, 18, 14, 2, 12, 10, 4, 6, 16, 8]),
    ("StMargarets",
        [4, 3, 5, 4, 3, 4, 4, 5, 4, 4, 4, 5, 3, 4, 3, 5, 5, 4],
        [13, 17, 11, 1, 15, 3, 5, 9, 7, 10, 6, 18, 12, 4, 14, 16, 8, 2]),
    ("Trim",
        [3, 5, 5, 4, 4, 4, 3, 4, 5, 4, 4, 3, 4, 4, 4, 4, 4, 5],
        [10, 4, 6, 14, 2, 12, 16, 8, 18, 17, 7, 15, 5, 13, 11, 3, 1, 9]),
    ("Tulfarris",
        [5, 3, 4, 4, 4, 3, 4, 4, 5, 4, 3, 4, 5, 4, 5, 3, 4, 4],
        [12, 16, 4, 2, 14, 10, 18, 8, 6, 1, 17, 7, 15, 9, 13, 11, 5, 3]),
    ("Rathsllagh",
        [5, 4, 4, 3, 4, 5, 3, 4, 4, 4, 5, 4, 3, 4, 4, 5, 3, 4],
        [13, 2, 15, 11, 9, 6, 17, 4, 7, 1, 10, 12, 18, 14, 8, 5, 16, 3]),
    ("ConcraWood",
        [5, 4, 4, 5, 4, 3, 4, 4, 3, 4, 4, 3, 5, 3, 5, 4, 4, 4],
        [13, 3, 17, 5, 1, 15, 11, 7, 9, 6, 4, 16, 12, 18, 14, 2, 8, 10]),
    ("Royal_Tara",
        [5, 4, 5, 4, 3, 4, 4, 3, 5, 4, 3, 4, 3, 5, 3, 4, 4, 5],
        [12, 4, 6, 16, 18, 14, 2, 10, 8, 1, 17, 5, 15, 11, 13, 3, 7, 9]),
    ("Font",
        [4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 5, 3, 4, 4, 5, 3, 3, 5],
        [17, 5, 6, 7, 15, 2, 18, 11, 1, 10, 8, 12, 16, 3, 14, 13, 9, 4]),
    ("Alicante",
        [5, 4, 3, 5, 4, 3, 4, 3, 5, 5, 4, 3, 4, 5, 3, 5, 3, 4],
        [17, 5, 15, 13, 1, 9, 3, 7, 11, 18, 6, 16, 2, 12, 8, 14, 4, 10]),
    ("Millicent",
        [5, 5, 4, 3, 4, 4, 4, 4, 3, 4, 4, 4, 5, 4, 3, 5, 3, 5],
        [2, 18, 10, 16, 12, 4, 6, 8, 14, 5, 7, 13, 17, 15, 11, 3, 9, 1]),
];

/// Courses bundled with the binary. The society sheet can add to or override these.
pub fn builtin_courses() -> impl Iterator<Item = Course> {
    COURSES
        .iter()
        .map(|(name, pars, indexes)| Course::new(*name, *pars, *indexes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::validate_course;

    #[test]
    fn test_builtin_courses_are_valid() {
        for course in builtin_courses() {
            assert!(
                validate_course(&course).is_ok(),
                "{} failed validation",
                course.name
            );
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let mut names: Vec<&str> = COURSES.iter().map(|(n, _, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COURSES.len());
    }
}
