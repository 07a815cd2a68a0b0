use super::*;

/// Tests a full profile update.
///
/// Expected: Ok(Profile) with the new nickname, bio and avatar
#[tokio::test]
async fn updates_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Scout").await?;

    let profile = ProfileService::new(db)
        .update(
            user.id,
            UpdateProfileParams {
                nickname: Some("Ranger".to_string()),
                bio: Some(Some("Plays support".to_string())),
                avatar_url: Some(Some("https://cdn.example.com/a.png".to_string())),
            },
        )
        .await?;

    assert_eq!(profile.nickname, "Ranger");
    assert_eq!(profile.bio.as_deref(), Some("Plays support"));
    assert_eq!(
        profile.avatar_url.as_deref(),
        Some("https://cdn.example.com/a.png")
    );

    Ok(())
}

/// Tests that a user without a profile row gets one on first update.
///
/// Expected: Ok(Profile) keeping the provider name as nickname
#[tokio::test]
async fn creates_missing_profile_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Provider Name")
        .build()
        .await?;

    let profile = ProfileService::new(db)
        .update(
            user.id,
            UpdateProfileParams {
                bio: Some(Some("Hello".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.nickname, "Provider Name");
    assert_eq!(profile.bio.as_deref(), Some("Hello"));

    Ok(())
}

/// Tests taking a nickname that another user has.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_user(db).await?;
    factory::create_profile(db, other.id, "Taken").await?;
    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Mine").await?;

    let result = ProfileService::new(db)
        .update(
            user.id,
            UpdateProfileParams {
                nickname: Some("Taken".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that re-saving one's own nickname is not a collision.
///
/// Expected: Ok(Profile)
#[tokio::test]
async fn keeping_own_nickname_is_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Mine").await?;

    let result = ProfileService::new(db)
        .update(
            user.id,
            UpdateProfileParams {
                nickname: Some("Mine".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests field validation.
///
/// Expected: Err(AppError::BadRequest) for a 1-character nickname, a 501-character bio
/// and a non-http avatar URL
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Mine").await?;
    let service = ProfileService::new(db);

    let invalid = [
        UpdateProfileParams {
            nickname: Some("A".to_string()),
            ..Default::default()
        },
        UpdateProfileParams {
            bio: Some(Some("x".repeat(501))),
            ..Default::default()
        },
        UpdateProfileParams {
            avatar_url: Some(Some("ftp://example.com/a.png".to_string())),
            ..Default::default()
        },
    ];

    for params in invalid {
        let result = service.update(user.id, params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
