use super::*;

/// Tests a user whose role meets the minimum tier.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_at_minimum_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Moderator")
        .role("ADMIN")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    assert_eq!(returned.name, "Moderator");
    assert_eq!(returned.role, Role::Admin);

    Ok(())
}

/// Tests that a higher tier satisfies a lower requirement.
///
/// Expected: Ok(User) for a `SUPER_ADMIN` checked against `USER`
#[tokio::test]
async fn grants_access_above_minimum_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "SUPER_ADMIN").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(Role::User)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a suspended user attempting a write.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_suspended_user_write_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "NONE").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(Role::User)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an admin cannot pass a `SUPER_ADMIN` requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_super_admin_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "ADMIN").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(Role::SuperAdmin)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
