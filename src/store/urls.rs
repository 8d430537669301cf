//! URL building utilities for the GitHub endpoints

/// Builds the raw content URL of a data file on a branch.
///
/// # Example
/// ```
/// use digrone_stats::store::urls::raw_file_url;
///
/// let url = raw_file_url(
///     "https://raw.githubusercontent.com",
///     "Setorator",
///     "digrone",
///     "main",
///     "data",
///     "players.json",
/// );
/// assert_eq!(
///     url,
///     "https://raw.githubusercontent.com/Setorator/digrone/main/data/players.json"
/// );
/// ```
pub fn raw_file_url(
    raw_base: &str,
    owner: &str,
    repo: &str,
    branch: &str,
    data_path: &str,
    file_name: &str,
) -> String {
    format!(
        "{raw_base}/{owner}/{repo}/{branch}/{}",
        repo_path(data_path, file_name)
    )
}

/// Builds the contents API URL used to look up and commit a data file.
///
/// # Example
/// ```
/// use digrone_stats::store::urls::contents_url;
///
/// let url = contents_url("https://api.github.com", "Setorator", "digrone", "data", "goals.json");
/// assert_eq!(
///     url,
///     "https://api.github.com/repos/Setorator/digrone/contents/data/goals.json"
/// );
/// ```
pub fn contents_url(
    api_base: &str,
    owner: &str,
    repo: &str,
    data_path: &str,
    file_name: &str,
) -> String {
    format!(
        "{api_base}/repos/{owner}/{repo}/contents/{}",
        repo_path(data_path, file_name)
    )
}

/// Joins the data directory and file name, tolerating stray slashes and an
/// empty directory (files at the repository root).
fn repo_path(data_path: &str, file_name: &str) -> String {
    let dir = data_path.trim_matches('/');
    if dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{dir}/{file_name}")
    }
}
