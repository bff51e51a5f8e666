use crate::error::TrendingError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookback window for the creation-date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Day,
    Week,
    Month,
    Year,
}

impl Duration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::Day => "day",
            Duration::Week => "week",
            Duration::Month => "month",
            Duration::Year => "year",
        }
    }

    /// Lower bound for `created:>` relative to `today`. Month and year
    /// subtraction is calendar-aware and clamps at month ends.
    pub fn cutoff_from(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Duration::Day => today - chrono::Duration::days(1),
            Duration::Week => today - chrono::Duration::days(7),
            Duration::Month => today - Months::new(1),
            Duration::Year => today - Months::new(12),
        }
    }
}

impl FromStr for Duration {
    type Err = TrendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Duration::Day),
            "week" => Ok(Duration::Week),
            "month" => Ok(Duration::Month),
            "year" => Ok(Duration::Year),
            other => Err(TrendingError::InvalidDuration(other.to_string())),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository summary exposed to callers. Any other fields in the upstream
/// payload are dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub description: Option<String>,
}

/// Envelope returned by the GitHub search API.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<RepoSummary>,
}
