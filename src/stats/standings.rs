//! Group-stage points table derived from a fixture list.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::Fixture;

/// A derived per-team row in a league table. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl Standing {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    // Counters saturate; a stored score near u32::MAX must not abort the table.
    fn apply_result(&mut self, goals_for: u32, goals_against: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => {
                self.wins = self.wins.saturating_add(1);
                self.points = self.points.saturating_add(3);
            }
            Ordering::Equal => {
                self.draws = self.draws.saturating_add(1);
                self.points = self.points.saturating_add(1);
            }
            Ordering::Less => self.losses = self.losses.saturating_add(1),
        }
    }
}

/// Table order: points, goal difference, goals scored (all descending), then
/// team name ascending. Only identically named rows compare equal.
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

/// Builds the points table for `fixtures`.
///
/// Fixtures without a score or with a placeholder team contribute nothing,
/// and a team that only appears in such fixtures gets no row.
pub fn standings(fixtures: &[Fixture]) -> Vec<Standing> {
    let mut table: HashMap<&str, Standing> = HashMap::new();

    for fixture in fixtures.iter().filter(|f| f.is_countable()) {
        let Some(score) = fixture.score else {
            continue;
        };
        table
            .entry(fixture.home())
            .or_insert_with(|| Standing::new(fixture.home()))
            .apply_result(score.home, score.away);
        table
            .entry(fixture.away())
            .or_insert_with(|| Standing::new(fixture.away()))
            .apply_result(score.away, score.home);
    }

    let mut rows: Vec<Standing> = table.into_values().collect();
    rows.sort_by(compare_standings);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn row<'a>(rows: &'a [Standing], team: &str) -> &'a Standing {
        rows.iter().find(|r| r.team == team).unwrap()
    }

    #[test]
    fn test_rematch_example() {
        let fixtures = vec![
            TestDataBuilder::fixture("A", "B", Some((3, 1))),
            TestDataBuilder::fixture("A", "B", Some((0, 0))),
        ];
        let rows = standings(&fixtures);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "A");
        let a = row(&rows, "A");
        assert_eq!(
            (a.played, a.wins, a.draws, a.losses, a.points, a.goals_for, a.goals_against),
            (2, 1, 1, 0, 4, 3, 1)
        );
        let b = row(&rows, "B");
        assert_eq!(
            (b.played, b.wins, b.draws, b.losses, b.points, b.goals_for, b.goals_against),
            (2, 0, 1, 1, 1, 1, 3)
        );
    }

    #[test]
    fn test_unscored_and_placeholder_fixtures_are_ignored() {
        let fixtures = vec![
            TestDataBuilder::fixture("A", "B", Some((1, 0))),
            TestDataBuilder::fixture("C", "D", None),
            TestDataBuilder::fixture("A", "TBD", Some((5, 0))),
        ];
        let rows = standings(&fixtures);

        let teams: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["A", "B"]);
        assert_eq!(row(&rows, "A").goals_for, 1);
    }

    #[test]
    fn test_tie_breaks_in_priority_order() {
        // Everyone on 3 points
        let fixtures = vec![
            TestDataBuilder::fixture("Bravo", "X1", Some((4, 0))),
            TestDataBuilder::fixture("Alpha", "X2", Some((2, 0))),
            TestDataBuilder::fixture("Charlie", "X3", Some((5, 1))),
            TestDataBuilder::fixture("Delta", "X4", Some((2, 0))),
        ];
        let rows = standings(&fixtures);
        let top: Vec<&str> = rows.iter().take(4).map(|r| r.team.as_str()).collect();

        // goal difference 4, 4 (more scored first), then 2, 2 by name
        assert_eq!(top, vec!["Charlie", "Bravo", "Alpha", "Delta"]);
    }

    #[test]
    fn test_points_beat_goal_stats() {
        let fixtures = vec![
            TestDataBuilder::fixture("Big", "Small", Some((10, 0))),
            TestDataBuilder::fixture("Small", "Other", Some((1, 0))),
            TestDataBuilder::fixture("Steady", "Other", Some((1, 0))),
            TestDataBuilder::fixture("Steady", "Small", Some((1, 0))),
        ];
        let rows = standings(&fixtures);
        assert_eq!(rows[0].team, "Steady");
        assert_eq!(rows[0].points, 6);
        assert_eq!(rows[1].team, "Big");
    }

    #[test]
    fn test_invariants_hold_for_tournament_table() {
        let fixtures = crate::tournament::group_matches();
        let rows = standings(&fixtures);

        for r in &rows {
            assert_eq!(r.played, r.wins + r.draws + r.losses);
            assert_eq!(r.points, 3 * r.wins + r.draws);
        }

        let counted: Vec<_> = fixtures.iter().filter(|f| f.is_countable()).collect();
        let drawn = counted
            .iter()
            .filter(|f| f.score.is_some_and(|s| s.home == s.away))
            .count() as u32;
        let decisive = counted.len() as u32 - drawn;
        let total: u32 = rows.iter().map(|r| r.points).sum();
        assert_eq!(total, 3 * decisive + 2 * drawn);

        for pair in rows.windows(2) {
            assert_eq!(compare_standings(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_huge_scores_saturate() {
        let fixtures = vec![
            TestDataBuilder::fixture("A", "B", Some((u32::MAX, 0))),
            TestDataBuilder::fixture("A", "B", Some((7, 0))),
        ];
        let rows = standings(&fixtures);

        let a = row(&rows, "A");
        assert_eq!(a.goals_for, u32::MAX);
        assert_eq!(a.points, 6);
        assert_eq!(row(&rows, "B").goals_against, u32::MAX);
    }

    #[test]
    fn test_empty_and_idempotent() {
        assert!(standings(&[]).is_empty());

        let fixtures = crate::tournament::group_matches();
        assert_eq!(standings(&fixtures), standings(&fixtures));
    }
}
