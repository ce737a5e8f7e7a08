use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The referenced topic slug and author username must already exist; the
/// factory does not create parent rows.
///
/// Defaults:
/// - title: `"Article {id}"`
/// - body: `"Body of article {id}"`
/// - votes: `0`
/// - created_at: now
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

impl<'a> ArticleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            topic: String::new(),
            author: String::new(),
            body: format!("Body of article {}", id),
            created_at: Utc::now(),
            votes: 0,
            article_img_url: format!("https://images.example.com/{}.jpg", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn article_img_url(mut self, article_img_url: impl Into<String>) -> Self {
        self.article_img_url = article_img_url.into();
        self
    }

    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            topic: ActiveValue::Set(self.topic),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            article_img_url: ActiveValue::Set(self.article_img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values under the given topic and author.
pub async fn create_article(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db).topic(topic).author(author).build().await
}
