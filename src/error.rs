use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendingError {
    #[error("Invalid duration: {0}. Valid options are: day, week, month, year")]
    InvalidDuration(String),

    #[error("Invalid limit: {0}. It must be between 1 and 100.")]
    InvalidLimit(String),

    #[error("Unexpected response format from GitHub API: {0}")]
    MalformedResponse(String),

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl TrendingError {
    /// Whether the error was caused by caller input rather than the upstream API.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrendingError::InvalidDuration(_) | TrendingError::InvalidLimit(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrendingError>;
