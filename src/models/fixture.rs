use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_TEAM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Group,
    Knockout,
}

/// Final score of a fixture, home side first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A scheduled or completed match between two named teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub stage: String,
    /// Start time slot as shown in the programme, e.g. "10:50"
    pub slot: String,
    pub teams: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(rename = "type")]
    pub kind: FixtureKind,
}

impl Fixture {
    pub fn home(&self) -> &str {
        &self.teams[0]
    }

    pub fn away(&self) -> &str {
        &self.teams[1]
    }

    pub fn involves(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    /// True when one side is still an undecided placeholder
    pub fn has_placeholder(&self) -> bool {
        self.involves(PLACEHOLDER_TEAM)
    }

    /// Fixtures that feed a standings table: both teams known and a score recorded.
    pub fn is_countable(&self) -> bool {
        self.score.is_some() && !self.has_placeholder()
    }

    pub fn result_text(&self) -> Option<String> {
        self.score.map(|s| format!("{} - {}", s.home, s.away))
    }
}
