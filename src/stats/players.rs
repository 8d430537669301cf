//! Roster orderings and per-player aggregates.
//!
//! Every function reads the stored counters verbatim and returns freshly
//! allocated records. Sorting is always stable, so players that compare equal
//! keep their roster order.

use std::cmp::Ordering;

use crate::models::{Match, Player};

/// Sort key for [`season_totals`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerOrder {
    /// Goals, most first (scoring leaders)
    #[default]
    Goals,
    /// Goals plus assists, most first
    Points,
    /// Surname ascending; single-token names sort last
    Surname,
}

/// Returns the roster reordered by `order`. No filtering is performed.
pub fn season_totals(players: &[Player], order: PlayerOrder) -> Vec<Player> {
    let mut sorted = players.to_vec();
    match order {
        PlayerOrder::Goals => sorted.sort_by(|a, b| b.goals.cmp(&a.goals)),
        PlayerOrder::Points => sorted.sort_by(|a, b| b.points().cmp(&a.points())),
        PlayerOrder::Surname => sorted.sort_by(compare_surname),
    }
    sorted
}

/// Compares players by the second token of their name.
///
/// A name without a second token has no surname to compare and is ordered
/// after every player that has one. Two such players compare equal.
pub fn compare_surname(a: &Player, b: &Player) -> Ordering {
    match (a.surname(), b.surname()) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Tournament roster: most matches played first, then most points.
pub fn active_roster(players: &[Player]) -> Vec<Player> {
    let mut roster = players.to_vec();
    roster.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then_with(|| b.points().cmp(&a.points()))
    });
    roster
}

/// The `n` players with the most points.
pub fn top_performers(players: &[Player], n: usize) -> Vec<Player> {
    let mut ranked = season_totals(players, PlayerOrder::Points);
    ranked.truncate(n);
    ranked
}

/// Player statistics table: points descending, surname ascending among equals.
pub fn points_table(players: &[Player]) -> Vec<Player> {
    let mut table = players.to_vec();
    table.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then_with(|| compare_surname(a, b))
    });
    table
}

/// Mean points per rostered player, `0.0` for an empty roster.
pub fn average_points_per_player(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u64 = players.iter().map(Player::points).sum();
    total as f64 / players.len() as f64
}

/// Resolves a match lineup to player records. Unknown ids are skipped.
pub fn lineup_players(game: &Match, players: &[Player]) -> Vec<Player> {
    game.lineup
        .iter()
        .filter_map(|id| players.iter().find(|p| &p.id == id))
        .cloned()
        .collect()
}
