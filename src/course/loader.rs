use super::{Course, HOLES};

const COURSE_KEY: &str = "course";

/// Values in a course row: name, 18 pars, 18 stroke indexes.
const COURSE_VALUES: usize = 1 + HOLES * 2;

/// Read course definitions from the key/value tab of the society sheet.
///
/// Rows keyed `Course` (case-insensitive, first column) carry
/// `Name,Par1..Par18,Index1..Index18`. The sheet may publish that string as
/// one quoted cell or spread it over many cells, so every non-empty cell after
/// the key is rejoined and split again. Rows with too few values or no name are
/// skipped. A blank or unreadable par/index becomes 0.
pub fn load_course_rows(rows: &[Vec<String>]) -> Vec<Course> {
    rows.iter().filter_map(|row| parse_course_row(row)).collect()
}

fn parse_course_row(row: &[String]) -> Option<Course> {
    let (key, rest) = row.split_first()?;
    if !key.trim().eq_ignore_ascii_case(COURSE_KEY) {
        return None;
    }

    let joined = rest
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    if joined.is_empty() {
        tracing::warn!("skipping course row with no value data");
        return None;
    }

    let values: Vec<&str> = joined.split(',').collect();
    if values.len() < COURSE_VALUES {
        tracing::warn!(
            "course row has insufficient data ({} values, expected {}): {}",
            values.len(),
            COURSE_VALUES,
            joined
        );
        return None;
    }

    let name = values[0].trim();
    if name.is_empty() {
        tracing::warn!("skipping course row with no course name");
        return None;
    }

    let pars = read_holes(name, "Par", &values[1..=HOLES]);
    let indexes = read_holes(name, "Index", &values[HOLES + 1..COURSE_VALUES]);

    Some(Course::new(name, pars, indexes))
}

fn read_holes(course: &str, label: &str, values: &[&str]) -> [u8; HOLES] {
    let mut holes = [0u8; HOLES];
    for (i, (slot, value)) in holes.iter_mut().zip(values).enumerate() {
        let value = value.trim();
        if value.is_empty() {
            tracing::warn!("missing {}{} for course {}", label, i + 1, course);
            continue;
        }
        match value.parse::<u8>() {
            Ok(n) => *slot = n,
            Err(_) => tracing::warn!(
                "unreadable {}{} '{}' for course {}",
                label,
                i + 1,
                value,
                course
            ),
        }
    }
    holes
}
