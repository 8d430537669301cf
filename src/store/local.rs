use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use super::{Collection, EntityStore, parse_collection};
use crate::error::AppError;
use crate::models::Player;

/// Collections stored as pretty-printed JSON files in one directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_of(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

/// Roster written the first time players are read from an empty directory.
pub fn seed_players() -> Vec<Player> {
    vec![
        Player::new("1", "Erik Andersson", 7),
        Player::new("2", "Johan Svensson", 11),
        Player::new("3", "Magnus Karlsson", 23),
    ]
}

impl EntityStore for LocalStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, AppError> {
        let path = self.path_of(collection);
        let source = path.to_string_lossy();

        match fs::read_to_string(&path).await {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), source);
                parse_collection(&content, &source)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if collection == Collection::Players {
                    info!("No roster at {source}, seeding sample players");
                    let seed = seed_players();
                    self.write(collection, &seed).await?;
                    let content = serde_json::to_string(&seed)?;
                    return parse_collection(&content, &source);
                }
                debug!("{source} does not exist yet, reading as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, items), fields(dir = %self.dir.display(), count = items.len()))]
    async fn write<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), AppError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }
        let content = serde_json::to_string_pretty(items)?;
        let path = self.path_of(collection);
        let mut file = fs::File::create(&path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        info!("Wrote {} {} to {}", items.len(), collection, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Match};
    use crate::testing_utils::TestDataBuilder;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_first_player_read_seeds_roster() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::new(temp_dir.path().join("data"));

        let players: Vec<Player> = store.read(Collection::Players).await.unwrap();
        assert_eq!(players, seed_players());
        assert!(temp_dir.path().join("data").join("players.json").exists());

        // seeding happens once; an emptied roster stays empty
        store.write::<Player>(Collection::Players, &[]).await.unwrap();
        let players: Vec<Player> = store.read(Collection::Players).await.unwrap();
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_missing_collections_read_as_empty() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::new(temp_dir.path());

        let matches: Vec<Match> = store.read(Collection::Matches).await.unwrap();
        let goals: Vec<Goal> = store.read(Collection::Goals).await.unwrap();
        let roster: Vec<Player> = store.read(Collection::TournamentPlayers).await.unwrap();
        assert!(matches.is_empty() && goals.is_empty() && roster.is_empty());
        assert!(!temp_dir.path().join("matches.json").exists());
    }

    #[tokio::test]
    async fn test_write_replaces_whole_collection() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::new(temp_dir.path());
        let season = TestDataBuilder::sample_season();

        store.write(Collection::Matches, &season).await.unwrap();
        store.write(Collection::Matches, &season[..2]).await.unwrap();

        let matches: Vec<Match> = store.read(Collection::Matches).await.unwrap();
        assert_eq!(matches, season[..2].to_vec());
    }

    #[tokio::test]
    async fn test_files_use_camel_case_keys() {
        let temp_dir = tempdir().unwrap();
        let store = LocalStore::new(temp_dir.path());
        let goal = TestDataBuilder::goal("g1", "1", Some("2"), "m1", 2, "04:30");
        store.write(Collection::Goals, &[goal]).await.unwrap();

        let raw = tokio::fs::read_to_string(temp_dir.path().join("goals.json"))
            .await
            .unwrap();
        assert!(raw.contains("\"playerId\": \"1\""));
        assert!(raw.contains("\"assistId\": \"2\""));
        assert!(raw.contains("\"matchId\": \"m1\""));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        tokio::fs::write(temp_dir.path().join("matches.json"), "not json")
            .await
            .unwrap();
        let store = LocalStore::new(temp_dir.path());

        let result = store.read::<Match>(Collection::Matches).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }
}
