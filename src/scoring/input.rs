use anyhow::{bail, Result};

use crate::course::HOLES;

/// Largest stroke count the scorecard accepts for a hole.
pub const MAX_STROKES: u8 = 9;

/// Parse hole-by-hole strokes as typed on a scorecard.
///
/// Entries are separated by commas or whitespace. Blank entries, `-` and `x`
/// mean the hole is unrecorded (stored as 0). A number outside 0-9 is cleared
/// to unrecorded, the same way the card's input boxes reject it. Fewer than 18
/// entries are padded with unrecorded holes.
pub fn parse_strokes(text: &str) -> Result<[u8; HOLES]> {
    let mut strokes = [0u8; HOLES];

    let entries: Vec<&str> = if text.contains(',') {
        text.split(',').map(str::trim).collect()
    } else {
        text.split_whitespace().collect()
    };

    // "4,5," has a trailing empty entry from the separator, not a 19th hole
    let entries = match entries.split_last() {
        Some((last, rest)) if last.is_empty() && entries.len() > HOLES => rest,
        _ => &entries[..],
    };

    if entries.len() > HOLES {
        bail!("Too many holes: got {}, a card has {}", entries.len(), HOLES);
    }

    for (hole, entry) in entries.iter().enumerate() {
        strokes[hole] = parse_entry(hole + 1, entry)?;
    }

    Ok(strokes)
}

fn parse_entry(hole: usize, entry: &str) -> Result<u8> {
    if entry.is_empty() || entry == "-" || entry.eq_ignore_ascii_case("x") {
        return Ok(0);
    }
    match entry.parse::<i64>() {
        Ok(value) if (0..=MAX_STROKES as i64).contains(&value) => Ok(value as u8),
        Ok(value) => {
            tracing::warn!(
                "hole {}: {} strokes is outside 0-{}, left unrecorded",
                hole,
                value,
                MAX_STROKES
            );
            Ok(0)
        }
        Err(_) => bail!("Hole {}: '{}' is not a stroke count", hole, entry),
    }
}

/// Number of holes with a recorded score.
pub fn entered_holes(strokes: &[u8; HOLES]) -> usize {
    strokes.iter().filter(|&&s| s != 0).count()
}
