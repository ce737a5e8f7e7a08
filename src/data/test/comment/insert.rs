use super::*;

/// Tests inserting a comment with the expected starting state.
#[tokio::test]
async fn inserts_comment_with_zero_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::create_article_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .insert(
            article.article_id,
            user.username.clone(),
            "Superficially charming".to_string(),
        )
        .await?;

    assert_eq!(comment.article_id, article.article_id);
    assert_eq!(comment.author, user.username);
    assert_eq!(comment.body, "Superficially charming");
    assert_eq!(comment.votes, 0);

    Ok(())
}
