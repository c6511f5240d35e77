use super::{Course, HOLES};

const MIN_PAR: u8 = 3;
const MAX_PAR: u8 = 6;

/// Check a course's data before it is offered for scoring.
/// Returns all validation errors at once (not just the first).
///
/// The scorer itself never calls this: a malformed stroke index only
/// miscomputes the allocation, it does not fail the round.
pub fn validate_course(course: &Course) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if course.name.trim().is_empty() {
        errors.push("course.name: must not be blank".to_string());
    }

    for (i, &par) in course.pars.iter().enumerate() {
        if !(MIN_PAR..=MAX_PAR).contains(&par) {
            errors.push(format!(
                "{}.pars[{}]: par {} outside {}-{}",
                course.name,
                i + 1,
                par,
                MIN_PAR,
                MAX_PAR
            ));
        }
    }

    // Stroke indexes must be a permutation of 1..=18
    let mut seen = [0usize; HOLES];
    for (i, &index) in course.indexes.iter().enumerate() {
        if index == 0 || index as usize > HOLES {
            errors.push(format!(
                "{}.indexes[{}]: stroke index {} outside 1-{}",
                course.name,
                i + 1,
                index,
                HOLES
            ));
        } else {
            seen[index as usize - 1] += 1;
        }
    }
    for (value, &count) in seen.iter().enumerate() {
        if count > 1 {
            errors.push(format!(
                "{}.indexes: stroke index {} used {} times",
                course.name,
                value + 1,
                count
            ));
        }
    }
    let missing: Vec<String> = seen
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(value, _)| (value + 1).to_string())
        .collect();
    if !missing.is_empty() {
        errors.push(format!(
            "{}.indexes: missing stroke index {}",
            course.name,
            missing.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
