use super::*;

/// Tests the first publish.
///
/// Expected: published_at set and every USER-or-above account notified, suspended
/// accounts excluded
#[tokio::test]
async fn first_publish_notifies_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let member = factory::create_user(db).await?;
    let suspended = factory::user::create_user_with_role(db, "NONE").await?;
    let notice = factory::create_notice(db, admin.id).await?;

    let detail = NoticeService::new(db).publish(notice.id).await?;

    assert!(detail.notice.is_published);
    assert!(detail.notice.published_at.is_some());
    let notifications = NotificationRepository::new(db);
    assert_eq!(notifications.count_unread(member.id).await?, 1);
    assert_eq!(notifications.count_unread(admin.id).await?, 1);
    assert_eq!(notifications.count_unread(suspended.id).await?, 0);

    Ok(())
}

/// Tests unpublishing and publishing again.
///
/// Expected: the original published_at is kept and nobody is notified twice
#[tokio::test]
async fn republish_keeps_time_and_stays_quiet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let notice = factory::create_notice(db, admin.id).await?;
    let service = NoticeService::new(db);

    let first = service.publish(notice.id).await?.notice.published_at;
    let hidden = service.unpublish(notice.id).await?;
    assert!(!hidden.notice.is_published);
    let again = service.publish(notice.id).await?;

    assert_eq!(again.notice.published_at, first);
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(admin.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests pinning a notice.
///
/// Expected: Ok with is_pinned set
#[tokio::test]
async fn pins_notice() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let notice = factory::create_notice(db, admin.id).await?;

    let detail = NoticeService::new(db).set_pinned(notice.id, true).await?;

    assert!(detail.notice.is_pinned);

    Ok(())
}
