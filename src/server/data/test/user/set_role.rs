use super::*;

/// Tests changing a user's role.
///
/// Expected: Ok with the new role persisted
#[tokio::test]
async fn sets_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_role(user.id, Role::Admin).await?.unwrap();
    assert_eq!(updated.role, Role::Admin);

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Admin);

    Ok(())
}

/// Tests setting the role of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_role(999, Role::Admin).await?;
    assert!(result.is_none());

    Ok(())
}
