use serde::Serialize;

use crate::course::{Course, FRONT_NINE, HOLES};

/// Handicap strokes are shared out across this many holes.
const STROKE_CYCLE: u32 = 18;

/// Points for a net par.
const NET_PAR_POINTS: i64 = 2;

/// Per-hole outcome of a scored round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoleResult {
    pub strokes_received: u32,
    pub points: u32,
}

/// Aggregate scorecard for one round.
///
/// Scores count entered holes only; an unrecorded hole (strokes == 0)
/// adds nothing to either score or points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub holes: [HoleResult; HOLES],
    pub out_score: u32,
    pub out_points: u32,
    pub out_par: u32,
    pub in_score: u32,
    pub in_points: u32,
    pub in_par: u32,
    pub total_score: u32,
    pub total_points: u32,
    pub total_par: u32,
}

impl RoundSummary {
    /// True if the summary carries nothing at all, as produced for a
    /// missing handicap.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Handicap strokes received on each hole.
///
/// Every hole gets `handicap / 18` strokes and the `handicap % 18` hardest
/// holes (lowest stroke index) get one more. `indexes` must be a permutation
/// of 1..=18; anything else gives a miscomputed allocation, not an error.
pub fn allocate_strokes(handicap: u32, indexes: &[u8; HOLES]) -> [u32; HOLES] {
    let mut received = [0u32; HOLES];
    for (slot, &index) in received.iter_mut().zip(indexes.iter()) {
        let index = index as u32;
        *slot = if index <= handicap {
            (handicap - index) / STROKE_CYCLE + 1
        } else {
            // handicap - index is negative here, clamped to zero before dividing
            0
        };
    }
    received
}

/// Stableford points for one hole.
///
/// `strokes == 0` means the hole was not entered and always scores 0.
/// Otherwise a net par is worth 2 points, one more per stroke under net par
/// and one fewer per stroke over, floored at 0 and capped at `u32::MAX`.
pub fn points_for_hole(strokes: u8, par: u8, strokes_received: u32) -> u32 {
    if strokes == 0 {
        return 0;
    }
    let net_strokes = i64::from(strokes) - i64::from(strokes_received);
    let net_vs_par = i64::from(par) - net_strokes;
    u32::try_from((net_vs_par + NET_PAR_POINTS).max(0)).unwrap_or(u32::MAX)
}

/// Score a round of 18 holes.
///
/// A handicap of 0 is read as "no handicap entered" and yields an all-zero
/// summary, pars included, whatever strokes were entered. Point totals
/// saturate rather than overflow for absurd handicaps.
pub fn score_round(course: &Course, handicap: u32, strokes: &[u8; HOLES]) -> RoundSummary {
    if handicap == 0 {
        return RoundSummary::default();
    }

    let received = allocate_strokes(handicap, &course.indexes);
    let mut summary = RoundSummary::default();

    for hole in 0..HOLES {
        let points = points_for_hole(strokes[hole], course.pars[hole], received[hole]);
        summary.holes[hole] = HoleResult {
            strokes_received: received[hole],
            points,
        };

        let score = strokes[hole] as u32;
        let par = course.pars[hole] as u32;
        if hole < FRONT_NINE {
            summary.out_score += score;
            summary.out_points = summary.out_points.saturating_add(points);
            summary.out_par += par;
        } else {
            summary.in_score += score;
            summary.in_points = summary.in_points.saturating_add(points);
            summary.in_par += par;
        }
    }

    summary.total_score = summary.out_score + summary.in_score;
    summary.total_points = summary.out_points.saturating_add(summary.in_points);
    summary.total_par = summary.out_par + summary.in_par;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseBook;

    fn ardee() -> Course {
        CourseBook::builtin().get("Ardee").unwrap().clone()
    }

    fn identity_indexes() -> [u8; HOLES] {
        let mut indexes = [0u8; HOLES];
        for (i, slot) in indexes.iter_mut().enumerate() {
            *slot = i as u8 + 1;
        }
        indexes
    }

    #[test]
    fn test_allocation_sums_to_handicap() {
        let courses = CourseBook::builtin();
        for course in courses.iter() {
            for handicap in 1..=36 {
                let total: u32 = allocate_strokes(handicap, &course.indexes).iter().sum();
                assert_eq!(total, handicap, "{} at handicap {}", course.name, handicap);
            }
        }
    }

    #[test]
    fn test_allocation_zero_handicap() {
        assert_eq!(allocate_strokes(0, &ardee().indexes), [0; HOLES]);
    }

    #[test]
    fn test_allocation_front_nine_handicap_nine() {
        // Ardee front 9 indexes: 8,14,4,18,2,12,10,6,16
        let received = allocate_strokes(9, &ardee().indexes);
        assert_eq!(&received[..9], &[1, 0, 1, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_allocation_above_eighteen() {
        let received = allocate_strokes(20, &identity_indexes());
        assert_eq!(received[0], 2);
        assert_eq!(received[1], 2);
        assert_eq!(received[2], 1);
        assert_eq!(received[17], 1);
    }

    #[test]
    fn test_allocation_plus_36() {
        let received = allocate_strokes(36, &identity_indexes());
        assert_eq!(received, [2; HOLES]);
    }

    #[test]
    fn test_points_unentered_hole() {
        for par in 3..=5 {
            for received in 0..3 {
                assert_eq!(points_for_hole(0, par, received), 0);
            }
        }
    }

    #[test]
    fn test_points_net_par_is_two() {
        for par in 3..=6 {
            assert_eq!(points_for_hole(par, par, 0), 2);
        }
        assert_eq!(points_for_hole(5, 4, 1), 2);
    }

    #[test]
    fn test_points_birdie_and_bogey() {
        assert_eq!(points_for_hole(3, 4, 0), 3);
        assert_eq!(points_for_hole(5, 4, 0), 1);
        assert_eq!(points_for_hole(2, 4, 1), 5);
    }

    #[test]
    fn test_points_floor_at_zero() {
        assert_eq!(points_for_hole(9, 3, 0), 0);
        assert_eq!(points_for_hole(7, 4, 1), 0);
    }

    #[test]
    fn test_points_monotonic_in_strokes() {
        for par in 3..=5 {
            for received in 0..3 {
                let mut last = u32::MAX;
                for strokes in 1..=9 {
                    let points = points_for_hole(strokes, par, received);
                    assert!(points <= last);
                    last = points;
                }
            }
        }
    }

    #[test]
    fn test_points_huge_allowance_saturates() {
        assert_eq!(points_for_hole(1, 4, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_score_round_max_handicap_does_not_overflow() {
        let summary = score_round(&ardee(), u32::MAX, &[1; HOLES]);
        assert_eq!(summary.total_points, u32::MAX);
        assert!(summary.out_points <= summary.total_points);
        assert_eq!(summary.total_score, 18);
        assert_eq!(summary.total_par, 71);
    }

    #[test]
    fn test_score_round_zero_handicap_is_empty() {
        let summary = score_round(&ardee(), 0, &[4; HOLES]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_par, 0);
    }

    #[test]
    fn test_score_round_all_pars() {
        let course = ardee();
        let summary = score_round(&course, 18, &course.pars);
        // One stroke on every hole: net birdie everywhere
        assert!(summary.holes.iter().all(|h| h.strokes_received == 1));
        assert!(summary.holes.iter().all(|h| h.points == 3));
        assert_eq!(summary.out_score, 35);
        assert_eq!(summary.in_score, 36);
        assert_eq!(summary.total_score, 71);
        assert_eq!(summary.out_points, 27);
        assert_eq!(summary.total_points, 54);
        assert_eq!(summary.total_par, 71);
    }

    #[test]
    fn test_score_round_partial_entry() {
        let course = ardee();
        let mut strokes = [0u8; HOLES];
        strokes[0] = 5; // par 4, index 8
        strokes[9] = 4; // par 4, index 9
        let summary = score_round(&course, 9, &strokes);

        assert_eq!(summary.holes[0].points, 2);
        assert_eq!(summary.holes[9].points, 3);
        assert_eq!(summary.holes[1].points, 0);
        assert_eq!(summary.out_score, 5);
        assert_eq!(summary.in_score, 4);
        assert_eq!(summary.total_points, 5);
        // Pars still count in full
        assert_eq!(summary.out_par, 35);
        assert_eq!(summary.in_par, 36);
    }
}
