use crate::error::TrendingError;
use crate::github::GitHubClient;
use crate::types::RepoSummary;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

const DEFAULT_DURATION: &str = "week";
const DEFAULT_LIMIT: i64 = 10;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GitHubClient>,
}

/// Query parameters for the trending endpoint
#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    pub duration: Option<String>,
    pub limit: Option<String>,
}

/// Successful response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub duration: String,
    pub limit: i64,
    pub count: usize,
    pub items: Vec<RepoSummary>,
}

/// Response for errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the application router. Cross-origin requests are allowed from any
/// origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/trending", get(get_trending))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(client: Arc<GitHubClient>, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState { client });

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn get_trending(
    State(state): State<AppState>,
    Query(params): Query<TrendingParams>,
) -> impl IntoResponse {
    let duration = params
        .duration
        .unwrap_or_else(|| DEFAULT_DURATION.to_string())
        .to_lowercase();

    // The limit arrives as a string so a non-integer value surfaces as an
    // invalid-limit error rather than a bare rejection.
    let limit = match params.limit {
        Some(raw) => match raw.parse::<i64>() {
            Ok(limit) => limit,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: TrendingError::InvalidLimit(raw).to_string(),
                    }),
                )
                    .into_response();
            }
        },
        None => DEFAULT_LIMIT,
    };

    match state.client.fetch_trending(&duration, limit).await {
        Ok(items) => (
            StatusCode::OK,
            Json(TrendingResponse {
                duration,
                limit,
                count: items.len(),
                items,
            }),
        )
            .into_response(),
        Err(e) if e.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("trending fetch failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
