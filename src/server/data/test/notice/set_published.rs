use super::*;

/// Tests that the first publish time survives unpublish and republish.
///
/// Expected: published_at set once and kept afterwards
#[tokio::test]
async fn keeps_first_publish_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let notice = factory::create_notice(db, admin.id).await?;
    let repo = NoticeRepository::new(db);

    let first = Utc::now() - Duration::hours(2);
    let published = repo.set_published(notice.id, true, first).await?.unwrap();
    assert!(published.is_published);
    assert_eq!(published.published_at, Some(first));

    let hidden = repo.set_published(notice.id, false, Utc::now()).await?.unwrap();
    assert!(!hidden.is_published);
    assert_eq!(hidden.published_at, Some(first));

    let republished = repo.set_published(notice.id, true, Utc::now()).await?.unwrap();
    assert_eq!(republished.published_at, Some(first));

    Ok(())
}
