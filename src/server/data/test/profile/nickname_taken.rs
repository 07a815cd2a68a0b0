use super::*;

/// Tests nickname collision checks.
///
/// Expected: taken for other users, free for the owner
#[tokio::test]
async fn ignores_own_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Tank").await?;

    let repo = ProfileRepository::new(db);
    assert!(repo.nickname_taken("Tank", None).await?);
    assert!(!repo.nickname_taken("Tank", Some(user.id)).await?);
    assert!(!repo.nickname_taken("Healer", None).await?);

    Ok(())
}
