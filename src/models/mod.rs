pub mod fixture;
pub mod goal;
pub mod matches;
pub mod player;

pub use fixture::{Fixture, FixtureKind, Score};
pub use goal::{Goal, parse_period_time};
pub use matches::{Match, MatchOutcome, parse_match_date};
pub use player::Player;
