//! Match chronology relative to a caller supplied "now".

use chrono::{DateTime, Utc};

use crate::models::{Match, MatchOutcome};

/// Where the season stands at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chronology {
    /// Latest match strictly before now
    pub previous: Option<Match>,
    /// Earliest match strictly after now
    pub next: Option<Match>,
    /// Matches dated strictly before now
    pub played_count: usize,
    /// Matches with more goals for than against, counted over all matches,
    /// including future-dated ones whose result was already entered
    pub win_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalTotals {
    pub goals_for: u64,
    pub goals_against: u64,
}

/// Computes previous/next match and the played and win counts.
///
/// On equal dates the match that comes first in the collection wins, for
/// both `previous` and `next`. A match dated exactly at `now` is neither.
pub fn match_chronology(matches: &[Match], now: DateTime<Utc>) -> Chronology {
    let mut previous: Option<&Match> = None;
    let mut next: Option<&Match> = None;
    let mut played_count = 0;

    for game in matches {
        if game.is_played(now) {
            played_count += 1;
            if previous.is_none_or(|p| game.date > p.date) {
                previous = Some(game);
            }
        } else if game.is_upcoming(now) && next.is_none_or(|n| game.date < n.date) {
            next = Some(game);
        }
    }

    Chronology {
        previous: previous.cloned(),
        next: next.cloned(),
        played_count,
        win_count: matches.iter().filter(|m| m.is_win()).count(),
    }
}

/// The outcomes of the last `n` played matches, oldest first.
pub fn last_n_results(matches: &[Match], now: DateTime<Utc>, n: usize) -> Vec<MatchOutcome> {
    let mut played: Vec<&Match> = matches.iter().filter(|m| m.is_played(now)).collect();
    played.sort_by(|a, b| b.date.cmp(&a.date));
    played.truncate(n);
    played.iter().rev().map(|m| m.outcome()).collect()
}

/// Goals for and against summed over every match in the collection.
pub fn team_goal_totals(matches: &[Match]) -> GoalTotals {
    matches.iter().fold(GoalTotals::default(), |acc, m| GoalTotals {
        goals_for: acc.goals_for.saturating_add(u64::from(m.goals_for)),
        goals_against: acc.goals_against.saturating_add(u64::from(m.goals_against)),
    })
}

/// All matches in chronological order, for the results list.
pub fn matches_by_date(matches: &[Match]) -> Vec<Match> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn game_at(id: &str, date: DateTime<Utc>, goals_for: u32, goals_against: u32) -> Match {
        TestDataBuilder::match_at(id, date, goals_for, goals_against)
    }

    #[test]
    fn test_previous_and_next_around_now() {
        let matches = vec![
            game_at("after", now() + Duration::days(1), 0, 0),
            game_at("before", now() - Duration::days(1), 2, 1),
        ];
        let chronology = match_chronology(&matches, now());

        assert_eq!(chronology.previous.unwrap().id, "before");
        assert_eq!(chronology.next.unwrap().id, "after");
        assert_eq!(chronology.played_count, 1);
    }

    #[test]
    fn test_match_exactly_at_now_is_neither() {
        let matches = vec![game_at("now", now(), 1, 0)];
        let chronology = match_chronology(&matches, now());

        assert!(chronology.previous.is_none());
        assert!(chronology.next.is_none());
        assert_eq!(chronology.played_count, 0);
        assert_eq!(chronology.win_count, 1);
    }

    #[test]
    fn test_win_count_includes_future_matches() {
        let matches = vec![
            game_at("past-win", now() - Duration::days(7), 3, 1),
            game_at("past-loss", now() - Duration::days(3), 0, 2),
            game_at("future-backfilled", now() + Duration::days(2), 5, 4),
            game_at("future-blank", now() + Duration::days(9), 0, 0),
        ];
        let chronology = match_chronology(&matches, now());

        assert_eq!(chronology.played_count, 2);
        assert_eq!(chronology.win_count, 2);
        assert_eq!(chronology.previous.unwrap().id, "past-loss");
        assert_eq!(chronology.next.unwrap().id, "future-backfilled");
    }

    #[test]
    fn test_equal_dates_prefer_first_inserted() {
        let day_before = now() - Duration::days(1);
        let day_after = now() + Duration::days(1);
        let matches = vec![
            game_at("a", day_before, 0, 0),
            game_at("b", day_before, 0, 0),
            game_at("c", day_after, 0, 0),
            game_at("d", day_after, 0, 0),
        ];
        let chronology = match_chronology(&matches, now());

        assert_eq!(chronology.previous.unwrap().id, "a");
        assert_eq!(chronology.next.unwrap().id, "c");
    }

    #[test]
    fn test_empty_collection_is_zeroed() {
        assert_eq!(match_chronology(&[], now()), Chronology::default());
        assert!(last_n_results(&[], now(), 5).is_empty());
        assert_eq!(team_goal_totals(&[]), GoalTotals::default());
    }

    #[test]
    fn test_last_n_with_fewer_played_matches() {
        let matches = vec![
            game_at("3", now() - Duration::days(1), 1, 1),
            game_at("1", now() - Duration::days(10), 4, 0),
            game_at("future", now() + Duration::days(1), 9, 0),
            game_at("2", now() - Duration::days(5), 0, 1),
        ];
        let results = last_n_results(&matches, now(), 5);

        assert_eq!(
            results,
            vec![MatchOutcome::Win, MatchOutcome::Loss, MatchOutcome::Draw]
        );
    }

    #[test]
    fn test_last_n_keeps_most_recent_window() {
        let matches: Vec<Match> = (1..=7)
            .map(|day| {
                let (gf, ga) = if day % 2 == 0 { (1, 0) } else { (0, 1) };
                game_at(&day.to_string(), now() - Duration::days(10 - day), gf, ga)
            })
            .collect();
        let results = last_n_results(&matches, now(), 5);

        // days 3..=7, oldest first
        assert_eq!(
            results,
            vec![
                MatchOutcome::Loss,
                MatchOutcome::Win,
                MatchOutcome::Loss,
                MatchOutcome::Win,
                MatchOutcome::Loss,
            ]
        );
    }

    #[test]
    fn test_goal_totals_cover_all_matches() {
        let matches = vec![
            game_at("1", now() - Duration::days(1), 3, 1),
            game_at("2", now() + Duration::days(1), 2, 2),
        ];
        assert_eq!(
            team_goal_totals(&matches),
            GoalTotals {
                goals_for: 5,
                goals_against: 3
            }
        );
    }

    #[test]
    fn test_goal_totals_past_u32_range() {
        let matches = vec![
            game_at("1", now() - Duration::days(2), u32::MAX, 1),
            game_at("2", now() - Duration::days(1), 1, u32::MAX),
        ];
        let totals = team_goal_totals(&matches);
        assert_eq!(totals.goals_for, u64::from(u32::MAX) + 1);
        assert_eq!(totals.goals_against, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_matches_by_date_ascending() {
        let matches = vec![
            game_at("late", now() + Duration::days(3), 0, 0),
            game_at("early", now() - Duration::days(3), 0, 0),
        ];
        let sorted = matches_by_date(&matches);
        assert_eq!(sorted[0].id, "early");
        assert_eq!(sorted[1].id, "late");
    }

    #[test]
    fn test_chronology_is_idempotent() {
        let matches = TestDataBuilder::sample_season();
        assert_eq!(
            match_chronology(&matches, now()),
            match_chronology(&matches, now())
        );
        assert_eq!(
            last_n_results(&matches, now(), 5),
            last_n_results(&matches, now(), 5)
        );
    }
}
