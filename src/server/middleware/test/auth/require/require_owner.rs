use super::*;

/// Tests the author passing an ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(author.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Owner(author.id)])
        .await?;

    assert_eq!(returned.id, author.id);

    Ok(())
}

/// Tests an admin moderating someone else's content.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::create_user(db).await?;
    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner(author.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a regular user touching someone else's content.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(other.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner(author.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, other.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
