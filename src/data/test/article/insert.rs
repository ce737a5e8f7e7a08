use super::*;
use crate::model::article::{CreateArticleBody, DEFAULT_ARTICLE_IMG_URL};

fn body(author: &str, topic: &str, img: Option<&str>) -> CreateArticleBody {
    CreateArticleBody {
        author: author.to_string(),
        title: "Text from title...".to_string(),
        body: "Text from body...".to_string(),
        topic: topic.to_string(),
        article_img_url: img.map(str::to_string),
    }
}

/// Tests inserting an article without an image URL falls back to the
/// default and starts with zero votes.
#[tokio::test]
async fn inserts_with_default_image_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo.insert(body(&user.username, &topic.slug, None)).await?;

    assert_eq!(article.title, "Text from title...");
    assert_eq!(article.votes, 0);
    assert_eq!(article.article_img_url, DEFAULT_ARTICLE_IMG_URL);

    Ok(())
}

/// Tests that a provided image URL is stored as-is.
#[tokio::test]
async fn inserts_with_provided_image_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .insert(body(&user.username, &topic.slug, Some("url")))
        .await?;

    assert_eq!(article.article_img_url, "url");

    Ok(())
}
