use super::*;

/// Tests loading a profile together with account data.
///
/// Expected: Ok with nickname from the profile and role from the user
#[tokio::test]
async fn loads_profile_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, "ADMIN").await?;
    factory::create_profile(db, user.id, "Shotcaller").await?;

    let profile = ProfileRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();

    assert_eq!(profile.nickname, "Shotcaller");
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.member_since, user.created_at);

    Ok(())
}

/// Tests the fallback for a user without a profile row.
///
/// Expected: Ok with the provider name used as nickname
#[tokio::test]
async fn falls_back_to_provider_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Provider Name")
        .build()
        .await?;

    let profile = ProfileRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();

    assert_eq!(profile.nickname, "Provider Name");
    assert!(profile.bio.is_none());

    Ok(())
}

/// Expected: Ok(None) for an unknown user
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ProfileRepository::new(db).find_by_user_id(42).await?.is_none());

    Ok(())
}
