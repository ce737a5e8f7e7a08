use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::data::article::{ArticleListing, ArticleRepository};
use crate::model::article::ArticleListQuery;

mod adjust_votes;
mod insert;
mod list;

/// Seeds `count` articles under the given topic and author with strictly
/// decreasing `created_at`, so the first created article is the newest.
async fn seed_articles(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
    count: usize,
) -> Result<Vec<entity::article::Model>, DbErr> {
    let base = Utc::now();
    let mut articles = Vec::with_capacity(count);

    for i in 0..count {
        let article = factory::article::ArticleFactory::new(db)
            .topic(topic)
            .author(author)
            .created_at(base - Duration::hours(i as i64))
            .build()
            .await?;
        articles.push(article);
    }

    Ok(articles)
}
