use super::*;

/// Tests optional lookup without a session user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_signed_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests optional lookup for a signed-in user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_signed_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}
