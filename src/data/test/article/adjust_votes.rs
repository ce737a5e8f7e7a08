use super::*;
use sea_orm::EntityTrait;
use test_utils::factory::article::ArticleFactory;

/// Tests applying a positive vote delta.
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let article = ArticleFactory::new(db)
        .topic(&topic.slug)
        .author(&user.username)
        .votes(100)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let updated = repo.adjust_votes(article.article_id, 5).await?.unwrap();

    assert_eq!(updated.votes, 105);

    Ok(())
}

/// Tests that a negative delta may take the tally below zero.
#[tokio::test]
async fn decrements_votes_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo.adjust_votes(article.article_id, -10).await?.unwrap();

    assert_eq!(updated.votes, -10);

    Ok(())
}

/// Tests that simultaneous deltas both land. The increment is a single
/// UPDATE, so no interleaving may drop one of them.
#[tokio::test]
async fn concurrent_deltas_all_apply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let (first, second) = tokio::join!(
        repo.adjust_votes(article.article_id, 5),
        repo.adjust_votes(article.article_id, 7)
    );
    first?;
    second?;

    let row = entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.votes, 12);

    Ok(())
}

/// Tests that adjusting an unknown article yields None.
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    assert!(repo.adjust_votes(15, 5).await?.is_none());

    Ok(())
}
