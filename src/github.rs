use crate::config::ProxyConfig;
use crate::error::{ContributorsError, Result};
use crate::models::QueryParameters;
use crate::types::GitHubContributor;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Upstream client for the GitHub contributor listing endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        if let Some(token) = &config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ContributorsError::ApiError(format!("Invalid token value: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: config.upstream_base_url.clone(),
        })
    }

    /// `{base}/repos/{owner}/{repo}/contributors` with both names escaped as path segments.
    pub fn contributors_url(&self, query: &QueryParameters) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                let message = format!("Base URL cannot hold a path: {}", self.base_url);
                ContributorsError::ApiError(message)
            })?
            .pop_if_empty()
            .extend(["repos", query.owner.as_str(), query.repo.as_str(), "contributors"]);
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self.client.get(url.clone()).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => {
                Err(ContributorsError::NotFound(format!("Resource not found: {}", url)))
            }
            StatusCode::FORBIDDEN => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ContributorsError::RateLimitExceeded(format!("Forbidden: {}", error_text)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ContributorsError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch the first page of contributors for a repository, in upstream order.
    pub async fn list_contributors(
        &self,
        query: &QueryParameters,
    ) -> Result<Vec<GitHubContributor>> {
        let url = self.contributors_url(query)?;
        debug!(repo = %query.full_name(), %url, "Fetching contributors");

        let response = self.make_request(url).await?;

        // GitHub answers 204 for repositories without commits
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body = response.bytes().await?;
        let contributors: Vec<GitHubContributor> = serde_json::from_slice(&body)?;
        Ok(contributors)
    }
}
