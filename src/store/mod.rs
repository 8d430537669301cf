//! Persistence of the player, match and goal collections.
//!
//! Each collection is one JSON array, read and written whole. There is no
//! merging: the last write of a collection wins.

pub mod fetch_utils;
pub mod github;
pub mod http_client;
pub mod local;
pub mod urls;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{info, instrument};

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{Goal, Match, Player};

pub use github::GitHubStore;
pub use local::LocalStore;

/// The persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Players,
    Matches,
    Goals,
    /// Roster used by the tournament view, kept apart from the season roster
    TournamentPlayers,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Players => "players.json",
            Collection::Matches => "matches.json",
            Collection::Goals => "goals.json",
            Collection::TournamentPlayers => "tournament-players.json",
        }
    }

    /// Commit message used when the collection is written to GitHub.
    pub fn commit_message(self) -> &'static str {
        match self {
            Collection::Players => "Update players data",
            Collection::Matches => "Update matches data",
            Collection::Goals => "Update goals data",
            Collection::TournamentPlayers => "Update tournament players data",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Players => "players",
            Collection::Matches => "matches",
            Collection::Goals => "goals",
            Collection::TournamentPlayers => "tournament players",
        };
        write!(f, "{name}")
    }
}

/// Whole-collection reads and writes.
///
/// Reads of a collection that does not exist yet return an empty list.
#[allow(async_fn_in_trait)]
pub trait EntityStore {
    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, AppError>;

    async fn write<T: Serialize>(&self, collection: Collection, items: &[T])
    -> Result<(), AppError>;
}

/// The store selected by configuration.
#[derive(Debug, Clone)]
pub enum Store {
    Local(LocalStore),
    GitHub(GitHubStore),
}

impl Store {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        match config.storage {
            StorageBackend::Local => {
                let dir = config.data_dir_path();
                info!("Using local store at {dir}");
                Ok(Store::Local(LocalStore::new(dir)))
            }
            StorageBackend::Github => {
                info!(
                    "Using GitHub store {}/{}@{}",
                    config.github.owner, config.github.repo, config.github.branch
                );
                Ok(Store::GitHub(GitHubStore::new(
                    config.github.clone(),
                    config.github_token.clone(),
                    config.http_timeout_seconds,
                )?))
            }
        }
    }
}

impl EntityStore for Store {
    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, AppError> {
        match self {
            Store::Local(store) => store.read(collection).await,
            Store::GitHub(store) => store.read(collection).await,
        }
    }

    async fn write<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), AppError> {
        match self {
            Store::Local(store) => store.write(collection, items).await,
            Store::GitHub(store) => store.write(collection, items).await,
        }
    }
}

/// The three season collections read together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub goals: Vec<Goal>,
}

/// Fetches players, matches and goals concurrently.
#[instrument(skip(store))]
pub async fn load_snapshot<S: EntityStore>(store: &S) -> Result<Snapshot, AppError> {
    let (players, matches, goals) = tokio::try_join!(
        store.read::<Player>(Collection::Players),
        store.read::<Match>(Collection::Matches),
        store.read::<Goal>(Collection::Goals),
    )?;
    info!(
        "Loaded {} players, {} matches, {} goals",
        players.len(),
        matches.len(),
        goals.len()
    );
    Ok(Snapshot {
        players,
        matches,
        goals,
    })
}

/// Parses a collection body. Blank content counts as an empty collection.
pub(crate) fn parse_collection<T: DeserializeOwned>(
    text: &str,
    source: &str,
) -> Result<Vec<T>, AppError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    fetch_utils::parse_json(text, source)
}
