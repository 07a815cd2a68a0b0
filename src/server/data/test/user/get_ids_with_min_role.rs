use super::*;

/// Tests selecting users at or above a role.
///
/// Expected: suspended users (`NONE`) are excluded when asking for `USER`
#[tokio::test]
async fn excludes_lower_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let suspended = factory::user::create_user_with_role(db, "NONE").await?;
    let user = factory::create_user(db).await?;
    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;

    let repo = UserRepository::new(db);
    let ids = repo.get_ids_with_min_role(Role::User).await?;
    assert_eq!(ids, vec![user.id, admin.id]);
    assert!(!ids.contains(&suspended.id));

    let admin_ids = repo.get_ids_with_min_role(Role::Admin).await?;
    assert_eq!(admin_ids, vec![admin.id]);

    Ok(())
}
