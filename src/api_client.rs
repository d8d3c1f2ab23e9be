use crate::config::ClientConfig;
use crate::error::{ContributorsError, Result};
use crate::models::{ContributorSummary, ErrorMessage, QueryParameters};
use reqwest::Client;
use std::fmt;
use std::future::Future;
use tracing::{debug, warn};
use url::Url;

/// Failed call to the proxy, carrying the server-provided message when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: Option<String>,
}

impl ApiFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "request failed without a server message"),
        }
    }
}

/// The proxy's list operation as seen by the client application.
pub trait ContributorsApi {
    fn list_contributors(
        &self,
        query: &QueryParameters,
    ) -> impl Future<Output = std::result::Result<Vec<ContributorSummary>, ApiFailure>> + Send;
}

/// HTTP client for the proxy service
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    api_url: Url,
}

impl ProxyClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().user_agent(crate::config::USER_AGENT).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    pub fn contributors_url(&self, query: &QueryParameters) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ContributorsError::ApiError(format!("API URL cannot hold a path: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["api", "contributors", query.owner.as_str(), query.repo.as_str()]);
        Ok(url)
    }
}

impl ContributorsApi for ProxyClient {
    async fn list_contributors(
        &self,
        query: &QueryParameters,
    ) -> std::result::Result<Vec<ContributorSummary>, ApiFailure> {
        let url = self.contributors_url(query).map_err(|e| {
            warn!("Error building request: {}", e);
            ApiFailure::default()
        })?;
        debug!(%url, "Requesting contributors from proxy");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Error: {}", e);
            ApiFailure::default()
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("Error reading response body: {}", e);
            ApiFailure::default()
        })?;

        if status.is_success() {
            return serde_json::from_slice::<Vec<ContributorSummary>>(&body).map_err(|e| {
                warn!("Error: malformed contributor list: {}", e);
                ApiFailure::default()
            });
        }

        warn!(%status, "Proxy returned an error");
        Err(ApiFailure {
            message: serde_json::from_slice::<ErrorMessage>(&body)
                .ok()
                .map(|e| e.message)
                .filter(|m| !m.is_empty()),
        })
    }
}
