//! Regionscupen 2025, the one-day tournament at ECG Arena.
//!
//! The programme is fixed, so the fixtures live here rather than in the
//! store. Results are filled in by editing this list.

use crate::constants::{PLACEHOLDER_TEAM, TEAM_NAME};
use crate::models::{Fixture, FixtureKind, Score};
use crate::stats::{Standing, standings};

pub const TOURNAMENT_NAME: &str = "Regionscupen";
pub const TOURNAMENT_YEAR: u16 = 2025;
pub const TOURNAMENT_DAY: &str = "27 december";
pub const TOURNAMENT_ARENA: &str = "ECG Arena";

/// A fixture seen from the team's side: who we meet and our score first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFixture {
    pub id: String,
    pub opponent: String,
    pub stage: String,
    pub slot: String,
    pub kind: FixtureKind,
    /// (ours, theirs)
    pub score: Option<(u32, u32)>,
}

fn fixture(
    id: &str,
    stage: &str,
    slot: &str,
    teams: [&str; 2],
    score: Option<(u32, u32)>,
    kind: FixtureKind,
) -> Fixture {
    Fixture {
        id: id.to_string(),
        stage: stage.to_string(),
        slot: slot.to_string(),
        teams: teams.map(str::to_string),
        score: score.map(|(home, away)| Score { home, away }),
        kind,
    }
}

/// The full tournament programme, group stage first.
pub fn group_matches() -> Vec<Fixture> {
    use FixtureKind::{Group, Knockout};

    vec![
        fixture("group-1", "Match 1", "10:00", [TEAM_NAME, "Tröccas"], Some((0, 4)), Group),
        fixture("group-2", "Match 2", "10:50", ["Monster E", "Lysviks IBF"], Some((2, 2)), Group),
        fixture("group-3", "Match 3", "11:40", ["Monster E", "Tröccas"], Some((0, 2)), Group),
        fixture("group-4", "Match 4", "12:30", [TEAM_NAME, "Lysviks IBF"], Some((3, 0)), Group),
        fixture("group-5", "Match 5", "13:20", [TEAM_NAME, "Monster E"], Some((2, 1)), Group),
        fixture("group-6", "Match 6", "14:10", ["Tröccas", "Lysviks IBF"], None, Group),
        fixture("kvart", "Kvartsfinal", "15:00 / 15:30", [TEAM_NAME, PLACEHOLDER_TEAM], None, Knockout),
        fixture("semi", "Semifinal", "16:30 / 16:50", [TEAM_NAME, PLACEHOLDER_TEAM], None, Knockout),
        fixture("final", "Final", "17:10", [TEAM_NAME, PLACEHOLDER_TEAM], None, Knockout),
    ]
}

/// Group fixtures involving `team`, flipped so that `team` is always first.
pub fn team_fixtures(fixtures: &[Fixture], team: &str) -> Vec<TeamFixture> {
    fixtures
        .iter()
        .filter(|f| f.kind == FixtureKind::Group && f.involves(team))
        .map(|f| {
            let at_home = f.home() == team;
            let opponent = if at_home { f.away() } else { f.home() };
            let score = f
                .score
                .map(|s| if at_home { (s.home, s.away) } else { (s.away, s.home) });
            TeamFixture {
                id: f.id.clone(),
                opponent: opponent.to_string(),
                stage: format!("Gruppspel • {}", f.stage),
                slot: f.slot.clone(),
                kind: f.kind,
                score,
            }
        })
        .collect()
}

/// Standings of the group stage only.
pub fn group_standings(fixtures: &[Fixture]) -> Vec<Standing> {
    let group: Vec<Fixture> = fixtures
        .iter()
        .filter(|f| f.kind == FixtureKind::Group)
        .cloned()
        .collect();
    standings(&group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_table() {
        let table = group_standings(&group_matches());
        let teams: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();

        // Monster E and Lysviks IBF are level on points and goal difference
        assert_eq!(teams, vec!["Tröccas", TEAM_NAME, "Monster E", "Lysviks IBF"]);
        assert_eq!(table[2].goals_for, 3);
        assert_eq!(table[3].goals_for, 2);

        let troccas = &table[0];
        assert_eq!((troccas.played, troccas.points), (2, 6));
        assert_eq!(troccas.goal_difference(), 6);

        let us = &table[1];
        assert_eq!((us.played, us.wins, us.losses, us.points), (3, 2, 1, 6));
        assert_eq!((us.goals_for, us.goals_against), (5, 5));
    }

    #[test]
    fn test_knockout_placeholders_never_reach_the_table() {
        let table = group_standings(&group_matches());
        assert!(table.iter().all(|s| s.team != PLACEHOLDER_TEAM));
    }

    #[test]
    fn test_team_fixtures_are_seen_from_our_side() {
        let ours = team_fixtures(&group_matches(), TEAM_NAME);

        assert_eq!(ours.len(), 3);
        assert_eq!(ours[0].opponent, "Tröccas");
        assert_eq!(ours[0].score, Some((0, 4)));
        assert_eq!(ours[0].stage, "Gruppspel • Match 1");
        assert!(ours.iter().all(|f| f.kind == FixtureKind::Group));
    }

    #[test]
    fn test_team_fixtures_flip_away_side() {
        let fixtures = vec![fixture(
            "x",
            "Match 9",
            "09:00",
            ["Tröccas", TEAM_NAME],
            Some((1, 3)),
            FixtureKind::Group,
        )];
        let ours = team_fixtures(&fixtures, TEAM_NAME);
        assert_eq!(ours[0].opponent, "Tröccas");
        assert_eq!(ours[0].score, Some((3, 1)));
    }
}
