use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use hm_core::{Topic, TopicDetail};

use crate::{ApiState, error::ApiError, metrics::record_topic_lookup};

use super::model::TopicListQuery;

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/topics", get(list_topics))
        .route("/api/topics/{id}", get(get_topic_detail))
        .route("/api/topics/{id}/questions", get(get_topic_questions))
}

/// List topics, optionally filtered and sorted
async fn list_topics(
    State(state): State<ApiState>,
    Query(query): Query<TopicListQuery>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    query.validate()?;

    let mut topics = query.filter().apply(state.catalog.topics());
    if let Some(sort) = query.sort {
        sort.sort(&mut topics);
    }

    tracing::debug!(count = topics.len(), "Listing topics");
    Ok(Json(topics))
}

/// Get the detail of one topic
async fn get_topic_detail(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<TopicDetail>, ApiError> {
    let detail = state.catalog.detail(&id).cloned();
    record_topic_lookup("detail", detail.is_some());

    detail.map(Json).ok_or_else(|| {
        tracing::debug!(topic_id = %id, "Topic detail not found");
        ApiError::TopicNotFound(id)
    })
}

/// Get the question list of one topic
async fn get_topic_questions(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let questions = state.catalog.questions(&id).map(<[String]>::to_vec);
    record_topic_lookup("questions", questions.is_some());

    questions.map(Json).ok_or(ApiError::TopicNotFound(id))
}
