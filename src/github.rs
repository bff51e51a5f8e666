use crate::error::{Result, TrendingError};
use crate::types::{Duration, RepoSummary};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration as StdDuration;
use tracing::debug;

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "trending-repos-cli";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Point the client at a different search endpoint. Used by tests to
    /// target a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the most-starred repositories created within the lookback
    /// window. Validates both parameters before any network I/O; a single
    /// page of `limit` results is requested, with no retries.
    pub async fn fetch_trending(&self, duration: &str, limit: i64) -> Result<Vec<RepoSummary>> {
        let duration: Duration = duration.parse()?;

        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(TrendingError::InvalidLimit(limit.to_string()));
        }

        let cutoff = duration.cutoff_from(Utc::now().date_naive());
        let query = format!("created:>{}", cutoff.format("%Y-%m-%d"));

        debug!(%duration, limit, %query, "querying GitHub search API");

        let url = format!("{}/search/repositories", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .query(&[
                ("q", query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", &limit.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TrendingError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let mut payload: serde_json::Value = response.json().await?;

        // The search envelope must carry an items array; an empty array is a
        // valid "no results" outcome, not an error.
        let items = match payload.get_mut("items") {
            Some(items @ serde_json::Value::Array(_)) => items.take(),
            _ => {
                return Err(TrendingError::MalformedResponse(
                    "missing items array".to_string(),
                ));
            }
        };

        let repos: Vec<RepoSummary> = serde_json::from_value(items)
            .map_err(|e| TrendingError::MalformedResponse(e.to_string()))?;

        Ok(repos)
    }
}
