use crate::models::{Goal, Player};

/// One line of a match goal log with names resolved from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalLine {
    pub period: u8,
    pub time: String,
    pub scorer: String,
    pub assist: Option<String>,
}

/// Goals of one match in scoring order (period, then clock).
///
/// Goals whose scorer is not on the roster are left out; an unknown
/// assisting player just drops the assist.
pub fn goals_for_match(goals: &[Goal], players: &[Player], match_id: &str) -> Vec<GoalLine> {
    let name_of = |id: &str| players.iter().find(|p| p.id == id).map(|p| p.name.clone());

    let mut in_match: Vec<&Goal> = goals.iter().filter(|g| g.match_id == match_id).collect();
    in_match.sort_by_key(|g| (g.period, g.seconds_into_period().unwrap_or(u32::MAX)));

    in_match
        .into_iter()
        .filter_map(|goal| {
            let scorer = name_of(&goal.player_id)?;
            Some(GoalLine {
                period: goal.period,
                time: goal.time.clone(),
                scorer,
                assist: goal.assist_id.as_deref().and_then(name_of),
            })
        })
        .collect()
}
