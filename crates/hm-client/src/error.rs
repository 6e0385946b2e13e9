use hm_core::validation::ValidationError;
use thiserror::Error;

/// Failure of a single call to the remote topic API
#[derive(Error, Debug)]
pub enum TopicApiError {
    #[error("invalid topic API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("topic API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("topic API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure surfaced by the topic repository
///
/// Transient API failures never surface; they engage the fallback catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("Topic not found")]
    NotFound(String),
}

/// Failure of a profile store operation
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("no authenticated user")]
    NotAuthenticated,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("profile database error: {0}")]
    Database(#[from] sqlx::Error),
}
