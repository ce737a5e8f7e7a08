//! Article repository, including the paginated listing query.
//!
//! The listing builds two statements over the same optional topic filter:
//! a data select (summary columns plus a `comment_count` aggregate from a
//! LEFT JOIN on comments, grouped by article) and an unpaginated COUNT.
//! Their results are reconciled into [`ArticleListing`], which is the only
//! place that distinguishes "page of rows", "topic exists but has no
//! articles", "topic does not exist", and "page past the end".

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::{
    data::exists::{check_exists, ExistsCheck},
    model::article::{ArticleListQuery, CreateArticleBody, DEFAULT_ARTICLE_IMG_URL},
};

/// Listing row produced by the data select: summary columns (no `body`)
/// plus the comment aggregate.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ArticleSummaryRecord {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: sea_orm::prelude::DateTimeUtc,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Single-article row with `body` and the comment aggregate.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ArticleRecord {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: sea_orm::prelude::DateTimeUtc,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Outcome of the listing query after reconciling rows, total count, topic
/// existence, and the pagination window.
#[derive(Debug, PartialEq)]
pub enum ArticleListing {
    Listed {
        articles: Vec<ArticleSummaryRecord>,
        total_count: u64,
    },
    /// A topic filter was supplied and no such topic exists.
    TopicMissing,
    /// The requested page lies past the last page of the filtered set.
    PageOutOfRange,
}

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the validated listing query.
    ///
    /// The sort column and direction come from the query's closed enums,
    /// the topic filter is a bound parameter. An empty page triggers the
    /// topic existence probe so a nonexistent topic maps to
    /// `TopicMissing` rather than an empty 200.
    pub async fn list(&self, query: &ArticleListQuery) -> Result<ArticleListing, DbErr> {
        let mut select = entity::prelude::Article::find()
            .select_only()
            .columns([
                entity::article::Column::ArticleId,
                entity::article::Column::Title,
                entity::article::Column::Topic,
                entity::article::Column::Author,
                entity::article::Column::CreatedAt,
                entity::article::Column::Votes,
                entity::article::Column::ArticleImgUrl,
            ])
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
            .group_by(entity::article::Column::ArticleId)
            .order_by(query.sort_by.column(), query.order_by.order())
            .limit(query.pagination.limit)
            .offset(query.pagination.offset());

        let mut count_select = entity::prelude::Article::find();

        if let Some(topic) = &query.topic {
            select = select.filter(entity::article::Column::Topic.eq(topic));
            count_select = count_select.filter(entity::article::Column::Topic.eq(topic));
        }

        // Count first: a page past the end (including a saturated window)
        // is rejected before the data select ever runs.
        let total_count = count_select.count(self.db).await?;

        if query.pagination.out_of_range(total_count) {
            return Ok(ArticleListing::PageOutOfRange);
        }

        let articles = select.into_model::<ArticleSummaryRecord>().all(self.db).await?;

        if articles.is_empty() {
            if let Some(topic) = &query.topic {
                if !check_exists(self.db, ExistsCheck::Topic(topic)).await? {
                    return Ok(ArticleListing::TopicMissing);
                }
            }
        }

        Ok(ArticleListing::Listed {
            articles,
            total_count,
        })
    }

    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<ArticleRecord>, DbErr> {
        entity::prelude::Article::find()
            .select_only()
            .columns([
                entity::article::Column::ArticleId,
                entity::article::Column::Title,
                entity::article::Column::Topic,
                entity::article::Column::Author,
                entity::article::Column::Body,
                entity::article::Column::CreatedAt,
                entity::article::Column::Votes,
                entity::article::Column::ArticleImgUrl,
            ])
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .group_by(entity::article::Column::ArticleId)
            .into_model::<ArticleRecord>()
            .one(self.db)
            .await
    }

    /// Inserts a new article. The caller is responsible for the topic and
    /// author existence gates; votes start at zero and a missing image URL
    /// falls back to the default.
    pub async fn insert(&self, params: CreateArticleBody) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(params.title),
            topic: ActiveValue::Set(params.topic),
            author: ActiveValue::Set(params.author),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(Utc::now()),
            votes: ActiveValue::Set(0),
            article_img_url: ActiveValue::Set(
                params
                    .article_img_url
                    .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string()),
            ),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a signed vote delta and returns the updated row, or `None`
    /// when the article does not exist. The increment happens in a single
    /// UPDATE so concurrent deltas cannot overwrite each other.
    pub async fn adjust_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<Option<entity::article::Model>, DbErr> {
        let result = entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::Votes,
                Expr::col(entity::article::Column::Votes).add(delta),
            )
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await
    }

    /// Deletes an article and its comments (owning-side cascade). Returns
    /// whether an article row was actually removed.
    pub async fn delete(&self, article_id: i32) -> Result<bool, DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Article::delete_by_id(article_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
