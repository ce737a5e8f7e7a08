use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::page::Pagination};

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
    pub article_id: i32,
}

impl From<entity::comment::Model> for CommentDto {
    fn from(model: entity::comment::Model) -> Self {
        Self {
            comment_id: model.comment_id,
            votes: model.votes,
            created_at: model.created_at,
            author: model.author,
            body: model.body,
            article_id: model.article_id,
        }
    }
}

/// Validated form of the `GET /api/articles/{id}/comments` query string.
/// Only `limit` and `p` are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListQuery {
    pub pagination: Pagination,
}

impl CommentListQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        if params
            .keys()
            .any(|name| !matches!(name.as_str(), "limit" | "p"))
        {
            return Err(AppError::BadRequest);
        }

        let pagination = Pagination::from_raw(
            params.get("limit").map(String::as_str),
            params.get("p").map(String::as_str),
        )?;

        Ok(Self { pagination })
    }
}

/// Body of `POST /api/articles/{id}/comments`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentBody {
    pub username: String,
    pub body: String,
}
