use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Fixture, FixtureKind, Goal, Match, Player, Score};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player with zeroed counters
    pub fn player(id: &str, name: &str) -> Player {
        Player::new(id, name, 0)
    }

    /// Creates a player with goals, assists and matches set
    pub fn player_with_stats(id: &str, name: &str, goals: u32, assists: u32, matches: u32) -> Player {
        Player {
            goals,
            assists,
            matches,
            ..Player::new(id, name, 0)
        }
    }

    /// The three-player roster a fresh local store is seeded with
    pub fn sample_roster() -> Vec<Player> {
        vec![
            Player::new("1", "Erik Andersson", 7),
            Player::new("2", "Johan Svensson", 11),
            Player::new("3", "Magnus Karlsson", 23),
        ]
    }

    /// Creates a match at an exact instant
    pub fn match_at(id: &str, date: DateTime<Utc>, goals_for: u32, goals_against: u32) -> Match {
        Match {
            id: id.to_string(),
            date,
            opponent: format!("Opponent {id}"),
            home_game: true,
            goals_for,
            goals_against,
            lineup: vec![],
        }
    }

    /// Creates a match on a calendar day at 18:00 UTC
    pub fn played_match(
        id: &str,
        year: i32,
        month: u32,
        day: u32,
        goals_for: u32,
        goals_against: u32,
    ) -> Match {
        let date = Utc
            .with_ymd_and_hms(year, month, day, 18, 0, 0)
            .single()
            .expect("valid test date");
        Self::match_at(id, date, goals_for, goals_against)
    }

    /// A winter season straddling 2025-03-01, with one back-filled future result
    pub fn sample_season() -> Vec<Match> {
        vec![
            Self::played_match("m1", 2025, 1, 11, 3, 2),
            Self::played_match("m2", 2025, 1, 25, 1, 4),
            Self::played_match("m3", 2025, 2, 8, 2, 2),
            Self::played_match("m4", 2025, 2, 15, 5, 0),
            Self::played_match("m5", 2025, 2, 22, 0, 1),
            Self::played_match("m6", 2025, 2, 27, 6, 3),
            Self::played_match("m7", 2025, 3, 8, 2, 1),
            Self::played_match("m8", 2025, 3, 22, 0, 0),
        ]
    }

    pub fn goal(
        id: &str,
        player_id: &str,
        assist_id: Option<&str>,
        match_id: &str,
        period: u8,
        time: &str,
    ) -> Goal {
        Goal {
            id: id.to_string(),
            player_id: player_id.to_string(),
            assist_id: assist_id.map(str::to_string),
            match_id: match_id.to_string(),
            period,
            time: time.to_string(),
        }
    }

    /// Creates a group fixture between two teams
    pub fn fixture(home: &str, away: &str, score: Option<(u32, u32)>) -> Fixture {
        Fixture {
            id: format!("{home}-{away}"),
            stage: "Group".to_string(),
            slot: "10:00".to_string(),
            teams: [home.to_string(), away.to_string()],
            score: score.map(|(home, away)| Score { home, away }),
            kind: FixtureKind::Group,
        }
    }
}
