use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubContributor {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
    pub html_url: String,
}
