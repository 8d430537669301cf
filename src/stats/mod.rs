//! Aggregation engine.
//!
//! Pure, synchronous functions that derive read-only views from snapshots of
//! the player, match, goal and fixture collections. Nothing here touches the
//! store or reads the clock: the current time is always passed in.

pub mod chronology;
pub mod goals;
pub mod players;
pub mod standings;

use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_RECENT_RESULTS;
use crate::models::{Match, MatchOutcome};

pub use chronology::{
    Chronology, GoalTotals, last_n_results, match_chronology, matches_by_date, team_goal_totals,
};
pub use goals::{GoalLine, goals_for_match};
pub use players::{
    PlayerOrder, active_roster, average_points_per_player, compare_surname, lineup_players,
    points_table, season_totals, top_performers,
};
pub use standings::{Standing, compare_standings, standings};

/// Everything the home view shows about the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub chronology: Chronology,
    pub recent_results: Vec<MatchOutcome>,
    pub totals: GoalTotals,
}

impl Dashboard {
    pub fn build(matches: &[Match], now: DateTime<Utc>) -> Self {
        Self {
            chronology: match_chronology(matches, now),
            recent_results: last_n_results(matches, now, DEFAULT_RECENT_RESULTS),
            totals: team_goal_totals(matches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::TimeZone;

    #[test]
    fn test_dashboard_combines_views() {
        let matches = TestDataBuilder::sample_season();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let dashboard = Dashboard::build(&matches, now);

        assert_eq!(dashboard.chronology, match_chronology(&matches, now));
        assert!(dashboard.recent_results.len() <= DEFAULT_RECENT_RESULTS);
        assert_eq!(dashboard.totals, team_goal_totals(&matches));
    }

    #[test]
    fn test_dashboard_on_empty_season() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let dashboard = Dashboard::build(&[], now);

        assert_eq!(dashboard.chronology.played_count, 0);
        assert!(dashboard.recent_results.is_empty());
        assert_eq!(dashboard.totals.goals_for, 0);
    }

    #[test]
    fn test_dashboard_with_huge_scores() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let matches = vec![
            TestDataBuilder::match_at("1", now - chrono::Duration::days(2), u32::MAX, 0),
            TestDataBuilder::match_at("2", now - chrono::Duration::days(1), 3, 0),
        ];
        let dashboard = Dashboard::build(&matches, now);

        assert_eq!(dashboard.totals.goals_for, u64::from(u32::MAX) + 3);
        assert_eq!(dashboard.chronology.win_count, 2);
    }
}
