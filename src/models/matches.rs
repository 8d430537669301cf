use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A played or scheduled match of the team.
///
/// `goals_for`/`goals_against` may already be filled in for a future date
/// when results are back-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(
        serialize_with = "serialize_match_date",
        deserialize_with = "deserialize_match_date"
    )]
    pub date: DateTime<Utc>,
    pub opponent: String,
    #[serde(default)]
    pub home_game: bool,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    /// Player ids credited with appearing in the match
    #[serde(default)]
    pub lineup: Vec<String>,
}

/// Result of a match from the team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

impl Match {
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_score(self.goals_for, self.goals_against)
    }

    pub fn is_win(&self) -> bool {
        self.goals_for > self.goals_against
    }

    /// A match counts as played only when its date is strictly before `now`.
    pub fn is_played(&self, now: DateTime<Utc>) -> bool {
        self.date < now
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }
}

/// Parses a stored match date.
///
/// Accepts RFC 3339 instants, `YYYY-MM-DDTHH:MM[:SS]` without an offset
/// (taken as UTC) and bare `YYYY-MM-DD` dates (midnight UTC), which is what
/// the date form field produces.
///
/// # Example
/// ```
/// use digrone_stats::models::parse_match_date;
///
/// let date = parse_match_date("2025-03-14").unwrap();
/// assert_eq!(date.to_rfc3339(), "2025-03-14T00:00:00+00:00");
/// assert!(parse_match_date("14.3.2025").is_err());
/// ```
pub fn parse_match_date(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid match date '{value}', expected YYYY-MM-DD or RFC 3339"))
}

fn serialize_match_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_match_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_match_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_plain_date() {
        let json = r#"{
            "id": "1700000000000",
            "date": "2025-02-01",
            "opponent": "Tröccas",
            "homeGame": true,
            "goalsFor": 4,
            "goalsAgainst": 2,
            "lineup": ["1", "2"]
        }"#;
        let game: Match = serde_json::from_str(json).unwrap();

        assert_eq!(game.date, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        assert!(game.home_game);
        assert_eq!(game.lineup, vec!["1", "2"]);
        assert_eq!(game.outcome(), MatchOutcome::Win);
    }

    #[test]
    fn test_deserialize_rfc3339_with_offset() {
        let json = r#"{"id":"1","date":"2025-02-01T19:30:00+01:00","opponent":"Monster E"}"#;
        let game: Match = serde_json::from_str(json).unwrap();

        assert_eq!(game.date, Utc.with_ymd_and_hms(2025, 2, 1, 18, 30, 0).unwrap());
        assert_eq!(game.goals_for, 0);
        assert!(game.lineup.is_empty());
    }

    #[test]
    fn test_invalid_date_fails_at_boundary() {
        let json = r#"{"id":"1","date":"next friday","opponent":"Monster E"}"#;
        let err = serde_json::from_str::<Match>(json).unwrap_err();
        assert!(err.to_string().contains("invalid match date"));
    }

    #[test]
    fn test_serializes_date_as_rfc3339() {
        let game = Match {
            id: "1".to_string(),
            date: Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap(),
            opponent: "Lysviks IBF".to_string(),
            home_game: false,
            goals_for: 1,
            goals_against: 1,
            lineup: vec![],
        };
        let value = serde_json::to_value(&game).unwrap();

        assert_eq!(value["date"], "2025-02-01T18:00:00+00:00");
        assert_eq!(value["goalsAgainst"], 1);
        assert_eq!(game.outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn test_datetime_local_format() {
        let parsed = parse_match_date("2025-02-01T18:45").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 2, 1, 18, 45, 0).unwrap());
    }

    #[test]
    fn test_played_and_upcoming_are_strict() {
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap();
        let game = Match {
            id: "1".to_string(),
            date: now,
            opponent: "Tröccas".to_string(),
            home_game: true,
            goals_for: 0,
            goals_against: 0,
            lineup: vec![],
        };

        assert!(!game.is_played(now));
        assert!(!game.is_upcoming(now));
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchOutcome::Loss).unwrap(),
            "\"loss\""
        );
    }
}
