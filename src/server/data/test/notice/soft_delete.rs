use super::*;

/// Tests that deleted notices disappear from lookups and listings.
///
/// Expected: first delete succeeds, the notice is gone, second delete reports false
#[tokio::test]
async fn hides_deleted_notice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let notice = factory::create_notice(db, admin.id).await?;
    let repo = NoticeRepository::new(db);

    assert!(repo.soft_delete(notice.id, Utc::now()).await?);
    assert!(repo.find_by_id(notice.id).await?.is_none());
    assert_eq!(repo.get_paginated(false, 0, 10).await?.1, 0);
    assert!(!repo.soft_delete(notice.id, Utc::now()).await?);

    Ok(())
}
