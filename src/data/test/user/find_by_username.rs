use super::*;

/// Tests looking up a user by its username.
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username(&user.username).await?.unwrap();

    assert_eq!(found.username, user.username);
    assert_eq!(found.name, user.name);
    assert_eq!(found.avatar_url, user.avatar_url);

    Ok(())
}

/// Tests that an unknown username yields None.
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.find_by_username("not-a-user").await?.is_none());

    Ok(())
}
