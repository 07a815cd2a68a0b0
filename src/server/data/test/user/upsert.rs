use super::*;

/// Tests creating a user on first login.
///
/// Expected: Ok with a new `USER` and the created flag set
#[tokio::test]
async fn creates_new_user_with_user_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, created) = UserRepository::new(db)
        .upsert(UpsertUserParam {
            oauth_id: "provider-1".to_string(),
            name: "Raider".to_string(),
            email: Some("raider@example.com".to_string()),
        })
        .await?;

    assert!(created);
    assert_eq!(user.oauth_id, "provider-1");
    assert_eq!(user.name, "Raider");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests that a later login refreshes provider data without touching the role.
///
/// Expected: Ok with name and email updated and the `ADMIN` role kept
#[tokio::test]
async fn updates_existing_user_and_preserves_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .oauth_id("provider-2")
        .name("Old Name")
        .role("ADMIN")
        .build()
        .await?;

    let (user, created) = UserRepository::new(db)
        .upsert(UpsertUserParam {
            oauth_id: "provider-2".to_string(),
            name: "New Name".to_string(),
            email: None,
        })
        .await?;

    assert!(!created);
    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}
