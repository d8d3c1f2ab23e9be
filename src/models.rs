use serde::{Deserialize, Serialize};

use crate::types::GitHubContributor;

/// Contributor record returned by the proxy, reshaped from the upstream one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorSummary {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
    pub profile_url: String,
}

impl From<GitHubContributor> for ContributorSummary {
    fn from(contributor: GitHubContributor) -> Self {
        Self {
            id: contributor.id,
            login: contributor.login,
            avatar_url: contributor.avatar_url,
            contributions: contributor.contributions,
            profile_url: contributor.html_url,
        }
    }
}

/// Owner/repository pair identifying one contributor lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub owner: String,
    pub repo: String,
}

impl QueryParameters {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Presence check only; no format validation.
    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
