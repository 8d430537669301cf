//! Di Gröne team statistics
//!
//! This library keeps the roster, match and goal records of the Di Gröne
//! floorball team and derives the views shown by the `digrone_stats` binary:
//! season totals, match chronology, recent form and tournament tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use digrone_stats::error::AppError;
//! use digrone_stats::stats::{Dashboard, PlayerOrder, season_totals};
//! use digrone_stats::store::{LocalStore, load_snapshot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let store = LocalStore::new("data");
//!     let snapshot = load_snapshot(&store).await?;
//!
//!     let dashboard = Dashboard::build(&snapshot.matches, Utc::now());
//!     println!("{} matches played", dashboard.chronology.played_count);
//!
//!     for player in season_totals(&snapshot.players, PlayerOrder::Goals) {
//!         println!("{:<24} {}", player.name, player.goals);
//!     }
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod stats;
pub mod store;
pub mod testing_utils;
pub mod tournament;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{Fixture, Goal, Match, MatchOutcome, Player};
pub use stats::{Chronology, Standing, last_n_results, match_chronology, season_totals, standings};
pub use store::{Collection, EntityStore, LocalStore, GitHubStore, Snapshot, Store};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
