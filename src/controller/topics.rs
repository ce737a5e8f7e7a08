use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    data::topic::TopicRepository,
    error::AppError,
    model::topic::{CreateTopicBody, TopicDto},
    state::AppState,
};

/// GET /api/topics
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics: Vec<TopicDto> = TopicRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(TopicDto::from)
        .collect();

    Ok(Json(json!({ "topics": topics })))
}

/// POST /api/topics
pub async fn post_topic(
    State(state): State<AppState>,
    body: Result<Json<CreateTopicBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;

    let topic = TopicRepository::new(&state.db).insert(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "topic": TopicDto::from(topic) })),
    ))
}
