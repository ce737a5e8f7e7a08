use super::*;
use crate::model::topic::CreateTopicBody;
use sea_orm::SqlErr;

/// Tests inserting a topic with and without a description.
#[tokio::test]
async fn inserts_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TopicRepository::new(db);

    let with_description = repo
        .insert(CreateTopicBody {
            slug: "gardening".to_string(),
            description: Some("Growing things".to_string()),
        })
        .await?;
    assert_eq!(with_description.slug, "gardening");
    assert_eq!(with_description.description.as_deref(), Some("Growing things"));

    let without_description = repo
        .insert(CreateTopicBody {
            slug: "woodwork".to_string(),
            description: None,
        })
        .await?;
    assert_eq!(without_description.description, None);

    Ok(())
}

/// Tests that a duplicate slug surfaces as a unique constraint violation.
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_topic(db).await?;

    let repo = TopicRepository::new(db);
    let err = repo
        .insert(CreateTopicBody {
            slug: existing.slug,
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
