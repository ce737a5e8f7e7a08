use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::Order;
use serde::{Deserialize, Serialize};

use crate::{data::article::ArticleRecord, data::article::ArticleSummaryRecord, error::AppError};
use crate::model::page::Pagination;

/// Image URL applied when an article is created without one.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// Query parameter names the listing endpoint recognizes. Anything else in
/// the query string is a Bad Request.
const RECOGNIZED_PARAMS: [&str; 5] = ["sort_by", "order_by", "topic", "limit", "p"];

/// Columns the listing may be sorted by.
///
/// The sort column is spliced into the ORDER BY clause as an identifier, so
/// it can never be a bind parameter; restricting it to this closed set of
/// variants (each mapped to a concrete entity column) is the injection
/// guard, not a cosmetic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    ArticleImgUrl,
}

impl SortColumn {
    fn from_raw(raw: &str) -> Result<Self, AppError> {
        match raw {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "article_img_url" => Ok(Self::ArticleImgUrl),
            _ => Err(AppError::BadRequest),
        }
    }

    pub fn column(self) -> entity::article::Column {
        match self {
            Self::ArticleId => entity::article::Column::ArticleId,
            Self::Title => entity::article::Column::Title,
            Self::Topic => entity::article::Column::Topic,
            Self::Author => entity::article::Column::Author,
            Self::CreatedAt => entity::article::Column::CreatedAt,
            Self::Votes => entity::article::Column::Votes,
            Self::ArticleImgUrl => entity::article::Column::ArticleImgUrl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn from_raw(raw: &str) -> Result<Self, AppError> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::BadRequest),
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Validated form of the `GET /api/articles` query string.
///
/// All validation happens here, before any query executes: unknown
/// parameter names, out-of-set `sort_by`/`order_by` values, and
/// non-positive-integer `limit`/`p` values short-circuit as Bad Request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order_by: SortOrder,
    pub pagination: Pagination,
}

impl Default for ArticleListQuery {
    fn default() -> Self {
        Self {
            topic: None,
            sort_by: SortColumn::CreatedAt,
            order_by: SortOrder::Desc,
            pagination: Pagination::default(),
        }
    }
}

impl ArticleListQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        if params
            .keys()
            .any(|name| !RECOGNIZED_PARAMS.contains(&name.as_str()))
        {
            return Err(AppError::BadRequest);
        }

        let sort_by = match params.get("sort_by") {
            Some(raw) => SortColumn::from_raw(raw)?,
            None => SortColumn::CreatedAt,
        };
        let order_by = match params.get("order_by") {
            Some(raw) => SortOrder::from_raw(raw)?,
            None => SortOrder::Desc,
        };
        let pagination = Pagination::from_raw(
            params.get("limit").map(String::as_str),
            params.get("p").map(String::as_str),
        )?;

        Ok(Self {
            topic: params.get("topic").cloned(),
            sort_by,
            order_by,
            pagination,
        })
    }
}

/// Full article representation, used for single-article responses.
///
/// `comment_count` is present on fetches that compute the aggregate (GET by
/// id, POST) and absent on vote patches, which return the bare updated row.
#[derive(Debug, Serialize)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

impl From<entity::article::Model> for ArticleDto {
    fn from(model: entity::article::Model) -> Self {
        Self {
            article_id: model.article_id,
            title: model.title,
            topic: model.topic,
            author: model.author,
            body: model.body,
            created_at: model.created_at,
            votes: model.votes,
            article_img_url: model.article_img_url,
            comment_count: None,
        }
    }
}

impl From<ArticleRecord> for ArticleDto {
    fn from(record: ArticleRecord) -> Self {
        Self {
            article_id: record.article_id,
            title: record.title,
            topic: record.topic,
            author: record.author,
            body: record.body,
            created_at: record.created_at,
            votes: record.votes,
            article_img_url: record.article_img_url,
            comment_count: Some(record.comment_count),
        }
    }
}

/// Listing row: every article column except `body`, plus the comment
/// aggregate. The listing is a summary view by contract.
#[derive(Debug, Serialize)]
pub struct ArticleSummaryDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummaryRecord> for ArticleSummaryDto {
    fn from(record: ArticleSummaryRecord) -> Self {
        Self {
            article_id: record.article_id,
            title: record.title,
            topic: record.topic,
            author: record.author,
            created_at: record.created_at,
            votes: record.votes,
            article_img_url: record.article_img_url,
            comment_count: record.comment_count,
        }
    }
}

/// Body of `POST /api/articles`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateArticleBody {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    #[serde(default)]
    pub article_img_url: Option<String>,
}
