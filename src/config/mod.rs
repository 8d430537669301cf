use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, env_vars, github};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_data_dir_path, get_log_dir_path};
use validation::validate_config;

/// Where the player, match and goal collections are persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON files in a local data directory
    #[default]
    Local,
    /// JSON files committed to a GitHub repository
    Github,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StorageBackend::Local),
            "github" => Ok(StorageBackend::Github),
            other => Err(AppError::config_error(format!(
                "Unknown storage backend '{other}', expected 'local' or 'github'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Local => write!(f, "local"),
            StorageBackend::Github => write!(f, "github"),
        }
    }
}

/// Location of the committed data files.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GitHubSettings {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory inside the repository holding the JSON files
    pub data_path: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            owner: github::DEFAULT_OWNER.to_string(),
            repo: github::DEFAULT_REPO.to_string(),
            branch: github::DEFAULT_BRANCH.to_string(),
            data_path: github::DEFAULT_DATA_PATH.to_string(),
        }
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage backend for the collections. Defaults to local files.
    #[serde(default)]
    pub storage: StorageBackend,
    /// Directory of the local JSON store. Platform data dir if not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Token used to commit data files. Only needed for writes in github mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for remote requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default)]
    pub github: GitHubSettings,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageBackend::default(),
            data_dir: None,
            github_token: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            github: GitHubSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file means defaults. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `DIGRONE_STORAGE` - Override storage backend (`local` or `github`)
    /// - `DIGRONE_GITHUB_TOKEN` - Override GitHub token
    /// - `DIGRONE_DATA_DIR` - Override local data directory
    /// - `DIGRONE_LOG_FILE` - Override log file path
    /// - `DIGRONE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = Self::load_stored(&config_path).await?;

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from a variable lookup, normally the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(storage) = lookup(env_vars::STORAGE) {
            self.storage = storage.parse()?;
        }

        if let Some(token) = lookup(env_vars::GITHUB_TOKEN).filter(|t| !t.is_empty()) {
            self.github_token = Some(token);
        }

        if let Some(data_dir) = lookup(env_vars::DATA_DIR) {
            self.data_dir = Some(data_dir);
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.storage,
            &self.github,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Directory of the local JSON store, configured or platform default.
    pub fn data_dir_path(&self) -> String {
        self.data_dir.clone().unwrap_or_else(get_data_dir_path)
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The token is never printed, only whether one is set.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Storage:");
        println!("{}", config.storage);
        println!("────────────────────────────────────");
        match config.storage {
            StorageBackend::Local => {
                println!("Data Directory:");
                println!("{}", config.data_dir_path());
            }
            StorageBackend::Github => {
                println!("Repository:");
                println!(
                    "{}/{}@{} ({})",
                    config.github.owner,
                    config.github.repo,
                    config.github.branch,
                    config.github.data_path
                );
                println!("────────────────────────────────────");
                println!("GitHub Token:");
                println!("{}", mask_token(config.github_token.as_deref()));
            }
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory
    /// if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// The configuration as stored at `path`, without env overrides.
    /// A missing file means defaults; an unreadable or malformed one is an error.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn mask_token(token: Option<&str>) -> String {
    match token {
        None => "(not set)".to_string(),
        Some(t) => match t.char_indices().rev().nth(3) {
            Some((start, _)) if start > 0 => format!("****{}", &t[start..]),
            _ => "****".to_string(),
        },
    }
}
