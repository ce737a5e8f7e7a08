use super::*;
use crate::model::article::{SortColumn, SortOrder};
use crate::model::page::Pagination;
use test_utils::factory::article::ArticleFactory;

/// Tests that the default listing returns every article with its comment
/// count, newest first.
#[tokio::test]
async fn lists_articles_with_comment_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let articles = seed_articles(db, &topic.slug, &user.username, 3).await?;

    // Two comments on the newest article, none on the others
    factory::create_comment(db, articles[0].article_id, &user.username).await?;
    factory::create_comment(db, articles[0].article_id, &user.username).await?;

    let repo = ArticleRepository::new(db);
    let listing = repo.list(&ArticleListQuery::default()).await?;

    let ArticleListing::Listed {
        articles: rows,
        total_count,
    } = listing
    else {
        panic!("expected Listed, got {:?}", listing);
    };

    assert_eq!(total_count, 3);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].article_id, articles[0].article_id);
    assert_eq!(rows[0].comment_count, 2);
    assert_eq!(rows[1].comment_count, 0);
    assert_eq!(rows[2].comment_count, 0);

    Ok(())
}

/// Tests that the default order is created_at descending.
#[tokio::test]
async fn default_order_is_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    seed_articles(db, &topic.slug, &user.username, 5).await?;

    let repo = ArticleRepository::new(db);
    let ArticleListing::Listed { articles, .. } = repo.list(&ArticleListQuery::default()).await?
    else {
        panic!("expected Listed");
    };

    let timestamps: Vec<_> = articles.iter().map(|a| a.created_at).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);

    Ok(())
}

/// Tests sorting by an allow-listed column in ascending order.
#[tokio::test]
async fn sorts_by_requested_column_and_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    for votes in [30, 10, 20] {
        ArticleFactory::new(db)
            .topic(&topic.slug)
            .author(&user.username)
            .votes(votes)
            .build()
            .await?;
    }

    let query = ArticleListQuery {
        sort_by: SortColumn::Votes,
        order_by: SortOrder::Asc,
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    let ArticleListing::Listed { articles, .. } = repo.list(&query).await? else {
        panic!("expected Listed");
    };

    let votes: Vec<_> = articles.iter().map(|a| a.votes).collect();
    assert_eq!(votes, vec![10, 20, 30]);

    Ok(())
}

/// Tests the topic filter and that total_count reflects the filtered set,
/// not the page.
#[tokio::test]
async fn filters_by_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mitch = factory::topic::TopicFactory::new(db).slug("mitch").build().await?;
    let cats = factory::topic::TopicFactory::new(db).slug("cats").build().await?;
    let user = factory::create_user(db).await?;

    seed_articles(db, &mitch.slug, &user.username, 12).await?;
    seed_articles(db, &cats.slug, &user.username, 1).await?;

    let query = ArticleListQuery {
        topic: Some("mitch".to_string()),
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    let ArticleListing::Listed {
        articles,
        total_count,
    } = repo.list(&query).await?
    else {
        panic!("expected Listed");
    };

    // Default page size caps the rows; the count covers the whole filter
    assert_eq!(articles.len(), 10);
    assert_eq!(total_count, 12);
    assert!(articles.iter().all(|a| a.topic == "mitch"));

    Ok(())
}

/// Tests that an existing topic with no articles yields an empty listing,
/// not a missing-topic outcome.
#[tokio::test]
async fn empty_topic_yields_empty_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::TopicFactory::new(db).slug("paper").build().await?;

    let query = ArticleListQuery {
        topic: Some("paper".to_string()),
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    let listing = repo.list(&query).await?;

    assert_eq!(
        listing,
        ArticleListing::Listed {
            articles: vec![],
            total_count: 0,
        }
    );

    Ok(())
}

/// Tests that filtering by a topic that does not exist is reported as
/// TopicMissing rather than an empty listing.
#[tokio::test]
async fn missing_topic_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ArticleListQuery {
        topic: Some("dogs".to_string()),
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    assert_eq!(repo.list(&query).await?, ArticleListing::TopicMissing);

    Ok(())
}

/// Tests the pagination window: a later page starts where the previous
/// page ended.
#[tokio::test]
async fn paginates_with_custom_limit_and_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let seeded = seed_articles(db, &topic.slug, &user.username, 13).await?;

    let query = ArticleListQuery {
        sort_by: SortColumn::ArticleId,
        order_by: SortOrder::Asc,
        pagination: Pagination { limit: 5, page: 2 },
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    let ArticleListing::Listed {
        articles,
        total_count,
    } = repo.list(&query).await?
    else {
        panic!("expected Listed");
    };

    assert_eq!(total_count, 13);
    assert_eq!(articles.len(), 5);
    assert_eq!(articles[0].article_id, seeded[5].article_id);

    Ok(())
}

/// Tests that a page past the end of the result set is PageOutOfRange,
/// while the last partial page is still served.
#[tokio::test]
async fn pages_past_the_end_are_out_of_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    seed_articles(db, &topic.slug, &user.username, 13).await?;

    let repo = ArticleRepository::new(db);

    let last_page = ArticleListQuery {
        pagination: Pagination { limit: 10, page: 2 },
        ..Default::default()
    };
    let ArticleListing::Listed { articles, .. } = repo.list(&last_page).await? else {
        panic!("expected Listed");
    };
    assert_eq!(articles.len(), 3);

    let past_the_end = ArticleListQuery {
        pagination: Pagination { limit: 10, page: 3 },
        ..Default::default()
    };
    assert_eq!(repo.list(&past_the_end).await?, ArticleListing::PageOutOfRange);

    Ok(())
}

/// Tests that a page number too large for the window arithmetic is out of
/// range rather than wrapping around into the result set.
#[tokio::test]
async fn huge_page_numbers_are_out_of_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    seed_articles(db, &topic.slug, &user.username, 3).await?;

    let query = ArticleListQuery {
        pagination: Pagination {
            limit: 10,
            page: u64::MAX,
        },
        ..Default::default()
    };

    let repo = ArticleRepository::new(db);
    assert_eq!(repo.list(&query).await?, ArticleListing::PageOutOfRange);

    Ok(())
}
