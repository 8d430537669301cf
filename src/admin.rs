//! Admin operations over in-memory collection copies.
//!
//! Every operation takes the current snapshot and returns the replacement
//! collection(s) the caller should hand to the store. Inputs are validated
//! before anything is built, so a rejected operation never produces a
//! partially updated collection.
//!
//! Player counters are running totals: adding a match bumps `matches` for the
//! lineup, adding a goal bumps `goals`/`assists`, and the delete operations
//! undo those bumps. The collections are saved independently, so a failure
//! between two saves can leave counters and records out of step.

use chrono::{DateTime, Utc};

use crate::constants::validation::{MAX_JERSEY_NUMBER, MAX_PERIOD, MAX_PLAYER_NAME_LENGTH};
use crate::error::AppError;
use crate::models::{Goal, Match, Player, parse_period_time};

/// Form input for a new match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub date: DateTime<Utc>,
    pub opponent: String,
    pub home_game: bool,
    pub goals_for: u32,
    pub goals_against: u32,
    pub lineup: Vec<String>,
}

/// Form input for a new goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub player_id: String,
    pub assist_id: Option<String>,
    pub match_id: String,
    pub period: u8,
    pub time: String,
}

/// Generates a timestamp id (milliseconds) that is not taken in `existing`.
pub fn next_id<'a>(existing: impl Iterator<Item = &'a str> + Clone, now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.clone().any(|id| id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Adds to a stored counter, rejecting the operation instead of wrapping.
fn bump(value: u32, amount: u32, counter: &str) -> Result<u32, AppError> {
    value
        .checked_add(amount)
        .ok_or_else(|| AppError::validation(format!("{counter} would exceed {}", u32::MAX)))
}

fn find_player_mut<'a>(players: &'a mut [Player], id: &str) -> Result<&'a mut Player, AppError> {
    players
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::not_found("player", id))
}

pub fn add_player(
    players: &[Player],
    name: &str,
    number: u32,
    now: DateTime<Utc>,
) -> Result<(Vec<Player>, Player), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("player name cannot be empty"));
    }
    if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "player name is longer than {MAX_PLAYER_NAME_LENGTH} characters"
        )));
    }
    if number > MAX_JERSEY_NUMBER {
        return Err(AppError::validation(format!(
            "jersey number must be between 0 and {MAX_JERSEY_NUMBER}"
        )));
    }

    let id = next_id(players.iter().map(|p| p.id.as_str()), now);
    let player = Player::new(id, name, number);
    let mut updated = players.to_vec();
    updated.push(player.clone());
    Ok((updated, player))
}

/// Removes a player. Goals and lineups that reference the player are kept
/// and simply stop resolving.
pub fn delete_player(players: &[Player], id: &str) -> Result<Vec<Player>, AppError> {
    if !players.iter().any(|p| p.id == id) {
        return Err(AppError::not_found("player", id));
    }
    Ok(players.iter().filter(|p| p.id != id).cloned().collect())
}

/// Appends a match and credits every lineup player with one match played.
pub fn add_match(
    matches: &[Match],
    players: &[Player],
    input: NewMatch,
    now: DateTime<Utc>,
) -> Result<(Vec<Match>, Vec<Player>, Match), AppError> {
    let opponent = input.opponent.trim();
    if opponent.is_empty() {
        return Err(AppError::validation("opponent cannot be empty"));
    }

    let mut lineup: Vec<String> = Vec::with_capacity(input.lineup.len());
    for id in input.lineup {
        if !players.iter().any(|p| p.id == id) {
            return Err(AppError::not_found("player", id));
        }
        if !lineup.contains(&id) {
            lineup.push(id);
        }
    }

    let game = Match {
        id: next_id(matches.iter().map(|m| m.id.as_str()), now),
        date: input.date,
        opponent: opponent.to_string(),
        home_game: input.home_game,
        goals_for: input.goals_for,
        goals_against: input.goals_against,
        lineup,
    };

    let updated_players = players
        .iter()
        .map(|p| -> Result<Player, AppError> {
            let mut p = p.clone();
            if game.lineup.contains(&p.id) {
                p.matches = bump(p.matches, 1, "matches played")?;
            }
            Ok(p)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut updated_matches = matches.to_vec();
    updated_matches.push(game.clone());
    Ok((updated_matches, updated_players, game))
}

/// Removes a match and takes the appearance back from its lineup.
pub fn delete_match(
    matches: &[Match],
    players: &[Player],
    id: &str,
) -> Result<(Vec<Match>, Vec<Player>), AppError> {
    let game = matches
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::not_found("match", id))?;

    let updated_players = players
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if game.lineup.contains(&p.id) {
                p.matches = p.matches.saturating_sub(1);
            }
            p
        })
        .collect();

    let updated_matches = matches.iter().filter(|m| m.id != id).cloned().collect();
    Ok((updated_matches, updated_players))
}

fn validate_goal(input: &NewGoal, players: &[Player], matches: &[Match]) -> Result<(), AppError> {
    if !players.iter().any(|p| p.id == input.player_id) {
        return Err(AppError::not_found("player", &input.player_id));
    }
    if !matches.iter().any(|m| m.id == input.match_id) {
        return Err(AppError::not_found("match", &input.match_id));
    }
    if let Some(assist) = &input.assist_id {
        if assist == &input.player_id {
            return Err(AppError::validation(
                "assisting player must differ from the scorer",
            ));
        }
        if !players.iter().any(|p| &p.id == assist) {
            return Err(AppError::not_found("player", assist));
        }
    }
    if !(1..=MAX_PERIOD).contains(&input.period) {
        return Err(AppError::validation(format!(
            "period must be between 1 and {MAX_PERIOD}"
        )));
    }
    if parse_period_time(&input.time).is_none() {
        return Err(AppError::validation(format!(
            "goal time '{}' must be mm:ss",
            input.time
        )));
    }
    Ok(())
}

/// Appends a goal and bumps the scorer's goals and the assist's assists.
pub fn add_goal(
    goals: &[Goal],
    players: &[Player],
    matches: &[Match],
    input: NewGoal,
    now: DateTime<Utc>,
) -> Result<(Vec<Goal>, Vec<Player>, Goal), AppError> {
    validate_goal(&input, players, matches)?;

    let goal = Goal {
        id: next_id(goals.iter().map(|g| g.id.as_str()), now),
        player_id: input.player_id,
        assist_id: input.assist_id,
        match_id: input.match_id,
        period: input.period,
        time: input.time.trim().to_string(),
    };

    let mut updated_players = players.to_vec();
    let scorer = find_player_mut(&mut updated_players, &goal.player_id)?;
    scorer.goals = bump(scorer.goals, 1, "goals")?;
    if let Some(assist) = &goal.assist_id {
        let assisting = find_player_mut(&mut updated_players, assist)?;
        assisting.assists = bump(assisting.assists, 1, "assists")?;
    }

    let mut updated_goals = goals.to_vec();
    updated_goals.push(goal.clone());
    Ok((updated_goals, updated_players, goal))
}

/// Removes a goal and takes the credit back from scorer and assist, if they
/// are still on the roster.
pub fn delete_goal(
    goals: &[Goal],
    players: &[Player],
    id: &str,
) -> Result<(Vec<Goal>, Vec<Player>), AppError> {
    let goal = goals
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| AppError::not_found("goal", id))?;

    let updated_players = players
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if p.id == goal.player_id {
                p.goals = p.goals.saturating_sub(1);
            }
            if goal.assist_id.as_deref() == Some(p.id.as_str()) {
                p.assists = p.assists.saturating_sub(1);
            }
            p
        })
        .collect();

    let updated_goals = goals.iter().filter(|g| g.id != id).cloned().collect();
    Ok((updated_goals, updated_players))
}

pub fn add_penalty_minutes(
    players: &[Player],
    id: &str,
    minutes: u32,
) -> Result<Vec<Player>, AppError> {
    let mut updated = players.to_vec();
    let player = find_player_mut(&mut updated, id)?;
    player.penalty_mins = bump(player.penalty_mins, minutes, "penalty minutes")?;
    Ok(updated)
}

/// Adds a fine to the player's open tab.
pub fn add_fine(players: &[Player], id: &str, amount: u32) -> Result<Vec<Player>, AppError> {
    if amount == 0 {
        return Err(AppError::validation("fine amount must be positive"));
    }
    let mut updated = players.to_vec();
    let player = find_player_mut(&mut updated, id)?;
    player.current_tab = bump(player.current_tab, amount, "open tab")?;
    Ok(updated)
}

/// Moves up to `amount` from the open tab to the paid-off total.
/// Returns the updated roster and the amount actually settled.
pub fn settle_tab(
    players: &[Player],
    id: &str,
    amount: u32,
) -> Result<(Vec<Player>, u32), AppError> {
    let mut updated = players.to_vec();
    let player = find_player_mut(&mut updated, id)?;
    let settled = amount.min(player.current_tab);
    player.paid_off_tab = bump(player.paid_off_tab, settled, "paid-off total")?;
    player.current_tab -= settled;
    Ok((updated, settled))
}
