use super::*;

/// Tests that nicknames take precedence over provider names.
///
/// Expected: nickname for users with a profile, provider name otherwise
#[tokio::test]
async fn prefers_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_profile = factory::user::UserFactory::new(db)
        .name("Provider A")
        .build()
        .await?;
    factory::create_profile(db, with_profile.id, "Nick A").await?;
    let without_profile = factory::user::UserFactory::new(db)
        .name("Provider B")
        .build()
        .await?;

    let names = UserRepository::new(db)
        .get_display_names(&[with_profile.id, without_profile.id])
        .await?;

    assert_eq!(names.get(with_profile.id), "Nick A");
    assert_eq!(names.get(without_profile.id), "Provider B");
    assert_eq!(names.get(12345), "User #12345");

    Ok(())
}
