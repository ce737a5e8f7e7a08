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
    data::article::{ArticleListing, ArticleRepository},
    data::exists::{check_exists, ExistsCheck},
    error::AppError,
    model::api::IncVotesBody,
    model::article::{ArticleDto, ArticleListQuery, ArticleSummaryDto, CreateArticleBody},
    state::AppState,
};

/// GET /api/articles
///
/// Filterable, sortable, paginated listing. Validation happens entirely in
/// `ArticleListQuery::from_params`; the repository reconciles the page
/// against the topic filter and total count.
pub async fn get_articles(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ArticleListQuery::from_params(&params)?;

    match ArticleRepository::new(&state.db).list(&query).await? {
        ArticleListing::Listed {
            articles,
            total_count,
        } => {
            let articles: Vec<ArticleSummaryDto> =
                articles.into_iter().map(ArticleSummaryDto::from).collect();

            Ok(Json(json!({
                "articles": articles,
                "total_count": total_count.to_string(),
            })))
        }
        ArticleListing::TopicMissing | ArticleListing::PageOutOfRange => Err(AppError::NotFound),
    }
}

/// POST /api/articles
///
/// The author and topic must already exist; a miss on either is Not Found.
/// The created article is re-fetched so the response carries its
/// `comment_count` (zero, but the shape matches GET by id).
pub async fn post_article(
    State(state): State<AppState>,
    body: Result<Json<CreateArticleBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;

    if !check_exists(&state.db, ExistsCheck::User(&body.author)).await? {
        return Err(AppError::NotFound);
    }
    if !check_exists(&state.db, ExistsCheck::Topic(&body.topic)).await? {
        return Err(AppError::NotFound);
    }

    let repo = ArticleRepository::new(&state.db);
    let inserted = repo.insert(body).await?;

    let article = repo
        .get_by_id(inserted.article_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "article {} missing immediately after insert",
                inserted.article_id
            ))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "article": ArticleDto::from(article) })),
    ))
}

/// GET /api/articles/{article_id}
pub async fn get_article_by_id(
    State(state): State<AppState>,
    article_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(article_id) = article_id.map_err(|_| AppError::BadRequest)?;

    let article = ArticleRepository::new(&state.db)
        .get_by_id(article_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "article": ArticleDto::from(article) })))
}

/// PATCH /api/articles/{article_id}
pub async fn patch_article_votes(
    State(state): State<AppState>,
    article_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<IncVotesBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(article_id) = article_id.map_err(|_| AppError::BadRequest)?;
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;

    let article = ArticleRepository::new(&state.db)
        .adjust_votes(article_id, body.inc_votes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "article": ArticleDto::from(article) })))
}

/// DELETE /api/articles/{article_id}
pub async fn delete_article(
    State(state): State<AppState>,
    article_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(article_id) = article_id.map_err(|_| AppError::BadRequest)?;

    let deleted = ArticleRepository::new(&state.db).delete(article_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
