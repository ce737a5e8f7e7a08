use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

/// Closed set of existence probes.
///
/// Used to tell "empty result" apart from "referenced row does not exist":
/// after a filtered read or mutation comes back empty, the caller probes
/// the parent here and maps a miss to Not Found. Table and column names
/// never come from the caller; each variant maps to exactly one typed
/// query.
#[derive(Debug, Clone, Copy)]
pub enum ExistsCheck<'a> {
    Article(i32),
    Comment(i32),
    Topic(&'a str),
    User(&'a str),
}

pub async fn check_exists(
    db: &DatabaseConnection,
    check: ExistsCheck<'_>,
) -> Result<bool, DbErr> {
    let count = match check {
        ExistsCheck::Article(article_id) => {
            entity::prelude::Article::find()
                .filter(entity::article::Column::ArticleId.eq(article_id))
                .count(db)
                .await?
        }
        ExistsCheck::Comment(comment_id) => {
            entity::prelude::Comment::find()
                .filter(entity::comment::Column::CommentId.eq(comment_id))
                .count(db)
                .await?
        }
        ExistsCheck::Topic(slug) => {
            entity::prelude::Topic::find()
                .filter(entity::topic::Column::Slug.eq(slug))
                .count(db)
                .await?
        }
        ExistsCheck::User(username) => {
            entity::prelude::User::find()
                .filter(entity::user::Column::Username.eq(username))
                .count(db)
                .await?
        }
    };

    Ok(count > 0)
}
