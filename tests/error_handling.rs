use github_trending::error::{Result, TrendingError};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = TrendingError::InvalidDuration("century".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid duration: century. Valid options are: day, week, month, year"
    );

    let error = TrendingError::InvalidLimit("0".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid limit: 0. It must be between 1 and 100."
    );

    let error = TrendingError::MalformedResponse("missing items array".to_string());
    assert_eq!(
        format!("{}", error),
        "Unexpected response format from GitHub API: missing items array"
    );

    let error = TrendingError::ApiError("API request failed with status 500".to_string());
    assert_eq!(
        format!("{}", error),
        "GitHub API error: API request failed with status 500"
    );
}

#[test]
fn test_validation_classification() {
    assert!(TrendingError::InvalidDuration("x".to_string()).is_validation());
    assert!(TrendingError::InvalidLimit("0".to_string()).is_validation());
    assert!(!TrendingError::ApiError("boom".to_string()).is_validation());
    assert!(!TrendingError::MalformedResponse("bad".to_string()).is_validation());
}

#[test]
fn test_error_source() {
    let error = TrendingError::InvalidDuration("century".to_string());
    assert!(error.source().is_none());
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(TrendingError::InvalidLimit("101".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
