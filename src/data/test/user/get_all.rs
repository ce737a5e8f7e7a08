use super::*;

/// Tests that every user row comes back.
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    let usernames: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert!(usernames.contains(&first.username.as_str()));
    assert!(usernames.contains(&second.username.as_str()));

    Ok(())
}
