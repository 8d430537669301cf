//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, default settings and the names of
//! everything that lives on disk or in the remote repository.

/// Name of the team whose statistics are tracked
pub const TEAM_NAME: &str = "Di Gröne";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Number of results shown in the dashboard form streak
pub const DEFAULT_RECENT_RESULTS: usize = 5;

/// Number of players highlighted as key players on the tournament page
pub const DEFAULT_TOP_PERFORMERS: usize = 3;

/// Placeholder used for knockout opponents that are not yet decided
pub const PLACEHOLDER_TEAM: &str = "TBD";

/// Application directory name under the platform config and data dirs
pub const APP_DIR_NAME: &str = "digrone_stats";

/// Default log file name
pub const LOG_FILE_NAME: &str = "digrone_stats.log";

/// Default remote repository holding the committed JSON data
pub mod github {
    pub const API_BASE_URL: &str = "https://api.github.com";
    pub const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
    pub const DEFAULT_OWNER: &str = "Setorator";
    pub const DEFAULT_REPO: &str = "digrone";
    pub const DEFAULT_BRANCH: &str = "main";
    pub const DEFAULT_DATA_PATH: &str = "data";
    pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
}

/// Environment variable names
pub mod env_vars {
    /// Storage backend override ("local" or "github")
    pub const STORAGE: &str = "DIGRONE_STORAGE";

    /// Token used for commits to the data repository
    pub const GITHUB_TOKEN: &str = "DIGRONE_GITHUB_TOKEN";

    /// Directory for the local JSON store
    pub const DATA_DIR: &str = "DIGRONE_DATA_DIR";

    /// Custom log file path
    pub const LOG_FILE: &str = "DIGRONE_LOG_FILE";

    /// HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "DIGRONE_HTTP_TIMEOUT";
}

/// Retry configuration for remote reads and writes
pub mod retry {
    /// Maximum number of retry attempts for transient failures
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff before the first retry
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound on a server supplied `Retry-After`
    pub const MAX_RETRY_AFTER_SECONDS: u64 = 30;
}

/// Limits applied to admin input
pub mod validation {
    /// Number of regulation periods in a match
    pub const MAX_PERIOD: u8 = 3;

    /// Longest accepted player name
    pub const MAX_PLAYER_NAME_LENGTH: usize = 100;

    /// Largest accepted jersey number
    pub const MAX_JERSEY_NUMBER: u32 = 99;
}
