use url::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.github.com";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const USER_AGENT: &str = "contributors-gallery/0.1.0";

/// Proxy service settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub port: u16,
    pub upstream_base_url: Url,
    /// Sent as a bearer token when present; requests are unauthenticated otherwise.
    pub auth_token: Option<String>,
    pub user_agent: String,
}

impl ProxyConfig {
    pub fn new(
        port: u16,
        upstream_base_url: &str,
        auth_token: Option<String>,
    ) -> crate::Result<Self> {
        Ok(Self {
            port,
            upstream_base_url: Url::parse(upstream_base_url)?,
            auth_token: auth_token.filter(|t| !t.is_empty()),
            user_agent: USER_AGENT.to_string(),
        })
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_base_url: Url::parse(DEFAULT_UPSTREAM_URL)
                .expect("default upstream URL is valid"),
            auth_token: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Client application settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> crate::Result<Self> {
        Ok(Self {
            api_url: Url::parse(api_url)?,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}
