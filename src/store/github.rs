use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::{ensure_success, read_json, send_with_retry};
use super::http_client::create_http_client_with_timeout;
use super::urls::{contents_url, raw_file_url};
use super::{Collection, EntityStore, parse_collection};
use crate::config::GitHubSettings;
use crate::constants::github::{ACCEPT_HEADER, API_BASE_URL, RAW_BASE_URL};
use crate::error::AppError;

/// Collections committed as JSON files to a GitHub repository.
///
/// Reads go through the public raw content host and need no token. Writes
/// replace the file through the contents API and require one.
#[derive(Clone)]
pub struct GitHubStore {
    client: Client,
    settings: GitHubSettings,
    token: Option<String>,
    api_base: String,
    raw_base: String,
}

impl fmt::Debug for GitHubStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubStore")
            .field("settings", &self.settings)
            .field("has_token", &self.token.is_some())
            .field("api_base", &self.api_base)
            .field("raw_base", &self.raw_base)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
    branch: &'a str,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    commit: Option<CommitInfo>,
}

#[derive(Debug, Deserialize)]
struct CommitInfo {
    sha: String,
}

impl GitHubStore {
    pub fn new(
        settings: GitHubSettings,
        token: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client_with_timeout(timeout_seconds)?,
            settings,
            token: token.filter(|t| !t.trim().is_empty()),
            api_base: API_BASE_URL.to_string(),
            raw_base: RAW_BASE_URL.to_string(),
        })
    }

    /// Points the store at other hosts, e.g. a GitHub Enterprise instance.
    pub fn with_base_urls(mut self, api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self.raw_base = raw_base.into();
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn raw_url(&self, collection: Collection) -> String {
        raw_file_url(
            &self.raw_base,
            &self.settings.owner,
            &self.settings.repo,
            &self.settings.branch,
            &self.settings.data_path,
            collection.file_name(),
        )
    }

    fn contents_url(&self, collection: Collection) -> String {
        contents_url(
            &self.api_base,
            &self.settings.owner,
            &self.settings.repo,
            &self.settings.data_path,
            collection.file_name(),
        )
    }

    /// Blob sha of the file on the configured branch, `None` if it does not exist.
    async fn current_sha(&self, token: &str, url: &str) -> Result<Option<String>, AppError> {
        let response = send_with_retry(
            || {
                self.client
                    .get(url)
                    .query(&[("ref", self.settings.branch.as_str())])
                    .bearer_auth(token)
                    .header(ACCEPT, ACCEPT_HEADER)
            },
            url,
        )
        .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("{url} does not exist on {}, creating it", self.settings.branch);
            return Ok(None);
        }
        let response = ensure_success(response, url)?;
        let contents: ContentsResponse = read_json(response, url).await?;
        Ok(Some(contents.sha))
    }
}

impl EntityStore for GitHubStore {
    #[instrument(skip(self))]
    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, AppError> {
        let url = self.raw_url(collection);
        info!("Fetching {collection} from {url}");

        let response = send_with_retry(|| self.client.get(&url), &url).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {status} for {url}, treating {collection} as empty");
            return Ok(Vec::new());
        }

        let text = response.text().await?;
        debug!("Response length: {} bytes", text.len());
        parse_collection(&text, &url)
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn write<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), AppError> {
        let token = self.token.as_deref().ok_or(AppError::MissingToken)?;
        let url = self.contents_url(collection);

        let json = serde_json::to_string_pretty(items)?;
        let sha = self.current_sha(token, &url).await?;
        let body = PutContentsRequest {
            message: collection.commit_message(),
            content: general_purpose::STANDARD.encode(json.as_bytes()),
            sha,
            branch: &self.settings.branch,
        };

        let response = send_with_retry(
            || {
                self.client
                    .put(&url)
                    .bearer_auth(token)
                    .header(ACCEPT, ACCEPT_HEADER)
                    .json(&body)
            },
            &url,
        )
        .await?;
        let response = ensure_success(response, &url)?;
        let result: PutContentsResponse = read_json(response, &url).await?;

        match result.commit {
            Some(commit) => info!("Committed {} {} as {}", items.len(), collection, commit.sha),
            None => info!("Committed {} {}", items.len(), collection),
        }
        Ok(())
    }
}
