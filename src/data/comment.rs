use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    data::exists::{check_exists, ExistsCheck},
    model::page::Pagination,
};

/// Outcome of the per-article comment listing, mirroring the article
/// listing's reconciliation: the page of rows, or the reason there isn't
/// one.
#[derive(Debug, PartialEq)]
pub enum CommentListing {
    Listed(Vec<entity::comment::Model>),
    /// No article with the requested id exists.
    ArticleMissing,
    /// The requested page lies past the article's last page of comments.
    PageOutOfRange,
}

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists an article's comments, newest first, within the pagination
    /// window. Probes article existence first so an unknown article id is
    /// `ArticleMissing` rather than an empty page.
    pub async fn list_by_article(
        &self,
        article_id: i32,
        pagination: Pagination,
    ) -> Result<CommentListing, DbErr> {
        if !check_exists(self.db, ExistsCheck::Article(article_id)).await? {
            return Ok(CommentListing::ArticleMissing);
        }

        let total = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await?;

        if pagination.out_of_range(total) {
            return Ok(CommentListing::PageOutOfRange);
        }

        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok(CommentListing::Listed(comments))
    }

    /// Inserts a comment on an article. The caller is responsible for the
    /// article and author existence gates.
    pub async fn insert(
        &self,
        article_id: i32,
        author: String,
        body: String,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            author: ActiveValue::Set(author),
            body: ActiveValue::Set(body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a signed vote delta and returns the updated row, or `None`
    /// when the comment does not exist. The increment happens in a single
    /// UPDATE so concurrent deltas cannot overwrite each other.
    pub async fn adjust_votes(
        &self,
        comment_id: i32,
        delta: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                Expr::col(entity::comment::Column::Votes).add(delta),
            )
            .filter(entity::comment::Column::CommentId.eq(comment_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Deletes a comment. Returns whether a row was actually removed.
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
