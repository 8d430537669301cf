use serde::{Deserialize, Deserializer, Serialize};

/// A goal scored by the team, with the optional assisting player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub player_id: String,
    #[serde(
        default,
        deserialize_with = "deserialize_assist",
        skip_serializing_if = "Option::is_none"
    )]
    pub assist_id: Option<String>,
    pub match_id: String,
    /// Regulation period, 1 to 3
    pub period: u8,
    /// Time within the period as `mm:ss`
    pub time: String,
}

impl Goal {
    /// Returns the goal time within its period in seconds, if `time` is a valid `mm:ss`.
    pub fn seconds_into_period(&self) -> Option<u32> {
        parse_period_time(&self.time)
    }
}

/// Parses a `mm:ss` period clock into seconds. Seconds must be below 60.
///
/// # Example
/// ```
/// use digrone_stats::models::parse_period_time;
///
/// assert_eq!(parse_period_time("12:34"), Some(754));
/// assert_eq!(parse_period_time("5:07"), Some(307));
/// assert_eq!(parse_period_time("12:75"), None);
/// ```
pub fn parse_period_time(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.trim().split_once(':')?;
    if seconds.len() != 2 || minutes.is_empty() || minutes.len() > 2 {
        return None;
    }
    if !minutes.chars().chain(seconds.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    (seconds < 60).then_some(minutes * 60 + seconds)
}

// The admin form used to submit "" for "no assist".
fn deserialize_assist<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|id| !id.trim().is_empty()))
}
