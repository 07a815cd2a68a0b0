use super::*;

/// Tests partial profile updates and clearing optional fields.
///
/// Expected: nickname changed, bio cleared, avatar untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id, "Before").await?;

    let repo = ProfileRepository::new(db);
    repo.update(
        user.id,
        UpdateProfileParams {
            nickname: None,
            bio: Some(Some("Support main".to_string())),
            avatar_url: Some(Some("https://cdn.example.com/a.png".to_string())),
        },
    )
    .await?;
    repo.update(
        user.id,
        UpdateProfileParams {
            nickname: Some("After".to_string()),
            bio: Some(None),
            avatar_url: None,
        },
    )
    .await?;

    let profile = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(profile.nickname, "After");
    assert!(profile.bio.is_none());
    assert_eq!(
        profile.avatar_url.as_deref(),
        Some("https://cdn.example.com/a.png")
    );

    Ok(())
}
