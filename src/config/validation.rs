use crate::config::{GitHubSettings, StorageBackend};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - In github mode, owner, repo and branch cannot be empty
/// - The data path may not be absolute or contain `..`
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
/// - HTTP timeout must be at least one second
pub fn validate_config(
    storage: StorageBackend,
    github: &GitHubSettings,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if storage == StorageBackend::Github {
        for (field, value) in [
            ("owner", &github.owner),
            ("repo", &github.repo),
            ("branch", &github.branch),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "GitHub {field} cannot be empty"
                )));
            }
        }
    }

    if github.data_path.starts_with('/') || github.data_path.split('/').any(|part| part == "..") {
        return Err(AppError::config_error(
            "GitHub data path must be relative to the repository root",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
