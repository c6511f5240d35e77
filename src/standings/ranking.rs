use std::cmp::Ordering;

use super::LeaguePlayer;

/// A player with their display rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player: LeaguePlayer,
}

/// Name order for tie-breaks: case-insensitive first, then exact text so the
/// order is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order a league: points descending, then plus/minus descending, then name.
///
/// Unreadable numbers sort below every readable one.
pub fn sort_league(league: &mut [LeaguePlayer]) {
    league.sort_by(|a, b| {
        b.points_value()
            .cmp(&a.points_value())
            .then_with(|| b.plus_minus_value().cmp(&a.plus_minus_value()))
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

/// Sort a league and assign display ranks.
///
/// A player shares the previous player's rank when both points and
/// plus/minus match; otherwise the rank is their 1-based position, so a tie
/// for 2nd is followed by 4th.
pub fn rank(mut league: Vec<LeaguePlayer>) -> Vec<RankedPlayer> {
    sort_league(&mut league);

    let mut ranked: Vec<RankedPlayer> = Vec::with_capacity(league.len());
    for (position, player) in league.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev)
                if prev.player.points_value() == player.points_value()
                    && prev.player.plus_minus_value() == player.plus_minus_value() =>
            {
                prev.rank
            }
            _ => position + 1,
        };
        ranked.push(RankedPlayer { rank, player });
    }
    ranked
}

/// Name(s) of whoever leads a league.
///
/// Unreadable numbers count as 0 here. Several players level on points and
/// plus/minus are all leaders: "A & B (tied)". An empty league gives "N/A".
pub fn league_leader(league: &[LeaguePlayer]) -> String {
    let score = |p: &LeaguePlayer| {
        (
            p.points_value().unwrap_or(0),
            p.plus_minus_value().unwrap_or(0),
        )
    };

    let Some(top) = league.iter().map(score).max() else {
        return "N/A".to_string();
    };

    let leaders: Vec<&str> = league
        .iter()
        .filter(|p| score(p) == top)
        .map(|p| p.name.as_str())
        .collect();

    if leaders.len() == 1 {
        leaders[0].to_string()
    } else {
        format!("{} (tied)", leaders.join(" & "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, plus_minus: &str, points: &str) -> LeaguePlayer {
        LeaguePlayer {
            name: name.to_string(),
            played: "5".to_string(),
            won: String::new(),
            lost: String::new(),
            plus_minus: plus_minus.to_string(),
            points: points.to_string(),
        }
    }

    fn names(ranked: &[RankedPlayer]) -> Vec<&str> {
        ranked.iter().map(|r| r.player.name.as_str()).collect()
    }

    fn ranks(ranked: &[RankedPlayer]) -> Vec<usize> {
        ranked.iter().map(|r| r.rank).collect()
    }

    #[test]
    fn test_sort_points_then_plus_minus_then_name() {
        let ranked = rank(vec![
            player("Cole", "+2", "8"),
            player("baker", "+5", "10"),
            player("Adams", "+5", "10"),
            player("Dunn", "+9", "8"),
        ]);
        assert_eq!(names(&ranked), vec!["Adams", "baker", "Dunn", "Cole"]);
    }

    #[test]
    fn test_tied_players_share_rank_and_skip() {
        let ranked = rank(vec![
            player("Evans", "+8", "12"),
            player("Baker", "+5", "10"),
            player("Adams", "+5", "10"),
            player("Cole", "+1", "6"),
        ]);
        assert_eq!(names(&ranked), vec!["Evans", "Adams", "Baker", "Cole"]);
        assert_eq!(ranks(&ranked), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_same_points_different_plus_minus_not_tied() {
        let ranked = rank(vec![player("A", "+1", "10"), player("B", "+2", "10")]);
        assert_eq!(ranks(&ranked), vec![1, 2]);
        assert_eq!(names(&ranked), vec!["B", "A"]);
    }

    #[test]
    fn test_three_way_tie_at_top() {
        let ranked = rank(vec![
            player("C", "0", "4"),
            player("B", "0", "4"),
            player("A", "0", "4"),
            player("D", "-3", "2"),
        ]);
        assert_eq!(ranks(&ranked), vec![1, 1, 1, 4]);
    }

    #[test]
    fn test_unreadable_points_sort_last() {
        let ranked = rank(vec![
            player("Blank", "", ""),
            player("Neg", "-20", "-1"),
            player("Zero", "0", "0"),
        ]);
        assert_eq!(names(&ranked), vec!["Zero", "Neg", "Blank"]);
        assert_eq!(ranks(&ranked), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_league() {
        assert!(rank(Vec::new()).is_empty());
        assert_eq!(league_leader(&[]), "N/A");
    }

    #[test]
    fn test_single_leader() {
        let league = vec![player("Adams", "+5", "10"), player("Baker", "+9", "12")];
        assert_eq!(league_leader(&league), "Baker");
    }

    #[test]
    fn test_tied_leaders() {
        let league = vec![
            player("Adams", "+5", "10"),
            player("Cole", "+1", "4"),
            player("Baker", "+5", "10"),
        ];
        assert_eq!(league_leader(&league), "Adams & Baker (tied)");
    }

    #[test]
    fn test_leader_counts_unreadable_as_zero() {
        let league = vec![player("Adams", "", ""), player("Baker", "-2", "0")];
        assert_eq!(league_leader(&league), "Adams");
    }
}
