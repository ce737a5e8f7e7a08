use super::*;

/// Tests that every topic row comes back.
#[tokio::test]
async fn returns_all_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_topic(db).await?;
    let second = factory::create_topic(db).await?;

    let repo = TopicRepository::new(db);
    let topics = repo.get_all().await?;

    assert_eq!(topics.len(), 2);
    let slugs: Vec<_> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert!(slugs.contains(&first.slug.as_str()));
    assert!(slugs.contains(&second.slug.as_str()));

    Ok(())
}

/// Tests that no topics yields an empty list rather than an error.
#[tokio::test]
async fn returns_empty_list_when_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TopicRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
