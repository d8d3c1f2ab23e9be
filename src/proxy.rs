use crate::config::ProxyConfig;
use crate::error::{ContributorsError, Result};
use crate::github::GitHubClient;
use crate::health::liveness_check;
use crate::models::{ContributorSummary, QueryParameters};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared, read-only state for the proxy handlers
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
}

impl AppState {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        Ok(Self {
            github: Arc::new(GitHubClient::new(config)?),
        })
    }
}

/// Create the proxy router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contributors/:owner/:repo", get(list_contributors))
        .route("/api/health", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the proxy HTTP server and run until Ctrl+C
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let app = router(AppState::new(&config)?);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(upstream = %config.upstream_base_url, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}

/// List contributors for one repository
async fn list_contributors(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    // Blank names are rejected; anything else goes upstream untouched
    if owner.trim().is_empty() || repo.trim().is_empty() {
        return ContributorsError::InvalidQuery(format!("owner={:?} repo={:?}", owner, repo))
            .into_response();
    }

    let query = QueryParameters::new(owner, repo);

    match state.github.list_contributors(&query).await {
        Ok(contributors) => {
            let summaries: Vec<ContributorSummary> =
                contributors.into_iter().map(ContributorSummary::from).collect();
            info!(repo = %query.full_name(), count = summaries.len(), "Fetched contributors");
            Json(summaries).into_response()
        }
        Err(e) => {
            error!(repo = %query.full_name(), "Error fetching GitHub contributors: {}", e);
            e.into_response()
        }
    }
}
