use serde::{Deserialize, Serialize};

/// A roster entry with its running season counters.
///
/// The counters are maintained by the admin operations on every goal, match
/// and fine event. They are never recomputed from the goal or match records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub penalty_mins: u32,
    #[serde(default)]
    pub matches: u32,
    #[serde(default)]
    pub current_tab: u32,
    #[serde(default)]
    pub paid_off_tab: u32,
}

impl Player {
    /// Creates a player with all counters at zero.
    pub fn new(id: impl Into<String>, name: impl Into<String>, number: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number,
            goals: 0,
            assists: 0,
            penalty_mins: 0,
            matches: 0,
            current_tab: 0,
            paid_off_tab: 0,
        }
    }

    /// Scoring points, goals plus assists. Widened so full counters cannot overflow.
    pub fn points(&self) -> u64 {
        u64::from(self.goals) + u64::from(self.assists)
    }

    /// The second whitespace separated token of the name, if there is one.
    ///
    /// # Example
    /// ```
    /// use digrone_stats::models::Player;
    ///
    /// assert_eq!(Player::new("1", "Erik Andersson", 7).surname(), Some("Andersson"));
    /// assert_eq!(Player::new("2", "Zlatan", 10).surname(), None);
    /// ```
    pub fn surname(&self) -> Option<&str> {
        self.name.split_whitespace().nth(1)
    }
}
