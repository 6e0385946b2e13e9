use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by a topic route, rendered as a JSON body
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Topic not found")]
    TopicNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status of the error response
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TopicNotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::TopicNotFound(id) => json!({
                "error": self.to_string(),
                "id": id,
            }),
            Self::Validation(_) => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
