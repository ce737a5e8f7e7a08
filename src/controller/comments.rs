use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    data::comment::{CommentListing, CommentRepository},
    data::exists::{check_exists, ExistsCheck},
    error::AppError,
    model::api::IncVotesBody,
    model::comment::{CommentDto, CommentListQuery, CreateCommentBody},
    state::AppState,
};

/// GET /api/articles/{article_id}/comments
pub async fn get_comments_by_article(
    State(state): State<AppState>,
    article_id: Result<Path<i32>, PathRejection>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let Path(article_id) = article_id.map_err(|_| AppError::BadRequest)?;
    let query = CommentListQuery::from_params(&params)?;

    match CommentRepository::new(&state.db)
        .list_by_article(article_id, query.pagination)
        .await?
    {
        CommentListing::Listed(comments) => {
            let comments: Vec<CommentDto> = comments.into_iter().map(CommentDto::from).collect();
            Ok(Json(json!({ "comments": comments })))
        }
        CommentListing::ArticleMissing | CommentListing::PageOutOfRange => {
            Err(AppError::NotFound)
        }
    }
}

/// POST /api/articles/{article_id}/comments
///
/// Both the article and the commenting user must exist; a miss on either
/// is Not Found.
pub async fn post_comment(
    State(state): State<AppState>,
    article_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<CreateCommentBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(article_id) = article_id.map_err(|_| AppError::BadRequest)?;
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;

    if !check_exists(&state.db, ExistsCheck::Article(article_id)).await? {
        return Err(AppError::NotFound);
    }
    if !check_exists(&state.db, ExistsCheck::User(&body.username)).await? {
        return Err(AppError::NotFound);
    }

    let comment = CommentRepository::new(&state.db)
        .insert(article_id, body.username, body.body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "comment": CommentDto::from(comment) })),
    ))
}

/// PATCH /api/comments/{comment_id}
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    comment_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<IncVotesBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(comment_id) = comment_id.map_err(|_| AppError::BadRequest)?;
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;

    let comment = CommentRepository::new(&state.db)
        .adjust_votes(comment_id, body.inc_votes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "comment": CommentDto::from(comment) })))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    comment_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(comment_id) = comment_id.map_err(|_| AppError::BadRequest)?;

    let deleted = CommentRepository::new(&state.db).delete(comment_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
