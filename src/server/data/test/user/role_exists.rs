use super::*;

/// Tests detecting whether a super admin exists.
///
/// Expected: false before one is created, true after
#[tokio::test]
async fn detects_super_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    factory::user::create_user_with_role(db, "ADMIN").await?;
    assert!(!repo.role_exists(Role::SuperAdmin).await?);

    factory::user::create_user_with_role(db, "SUPER_ADMIN").await?;
    assert!(repo.role_exists(Role::SuperAdmin).await?);

    Ok(())
}
