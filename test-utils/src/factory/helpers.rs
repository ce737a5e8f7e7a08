//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions between rows created within one test.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a topic, a user, and an article referencing both.
///
/// Convenience for tests that only need one article and don't care about
/// the parent rows' contents.
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::topic::Model,
        entity::user::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let topic = super::topic::create_topic(db).await?;
    let user = super::user::create_user(db).await?;
    let article = super::article::create_article(db, &topic.slug, &user.username).await?;

    Ok((topic, user, article))
}
