use super::*;

/// Tests the inbox listing with the unread counter.
///
/// Expected: Ok with 2 notifications, 1 unread after marking one read
#[tokio::test]
async fn lists_with_unread_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = NotificationService::new(db);
    service
        .dispatch(params(NotificationCategory::GamePost, vec![user.id]))
        .await?;
    service
        .dispatch(params(NotificationCategory::System, vec![user.id]))
        .await?;

    let page = service.list_mine(user.id, false, 0, 10).await?;
    assert_eq!(page.notifications.len(), 2);
    assert_eq!(page.unread, 2);

    service
        .mark_read(user.id, page.notifications[0].receipt_id)
        .await?;

    let page = service.list_mine(user.id, false, 0, 10).await?;
    assert_eq!(page.unread, 1);
    let unread_only = service.list_mine(user.id, true, 0, 10).await?;
    assert_eq!(unread_only.notifications.len(), 1);

    Ok(())
}

/// Tests that marking a receipt read twice keeps the first read time.
///
/// Expected: Ok(()) both times with an unchanged `read_at`
#[tokio::test]
async fn mark_read_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = NotificationService::new(db);
    service
        .dispatch(params(NotificationCategory::System, vec![user.id]))
        .await?;
    let receipt_id = service.list_mine(user.id, false, 0, 10).await?.notifications[0].receipt_id;

    service.mark_read(user.id, receipt_id).await?;
    let first = NotificationRepository::new(db)
        .find_receipt(receipt_id)
        .await?
        .unwrap()
        .read_at;
    service.mark_read(user.id, receipt_id).await?;
    let second = NotificationRepository::new(db)
        .find_receipt(receipt_id)
        .await?
        .unwrap()
        .read_at;

    assert!(first.is_some());
    assert_eq!(first, second);

    Ok(())
}

/// Tests touching another user's receipt.
///
/// Expected: Err(AppError::NotFound) for both mark_read and delete
#[tokio::test]
async fn foreign_receipt_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = NotificationService::new(db);
    service
        .dispatch(params(NotificationCategory::System, vec![owner.id]))
        .await?;
    let receipt_id = service.list_mine(owner.id, false, 0, 10).await?.notifications[0].receipt_id;

    assert!(matches!(
        service.mark_read(other.id, receipt_id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(other.id, receipt_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests marking everything read and deleting a receipt.
///
/// Expected: mark_all_read reports 2, delete removes the receipt from the inbox
#[tokio::test]
async fn mark_all_read_and_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = NotificationService::new(db);
    for _ in 0..2 {
        service
            .dispatch(params(NotificationCategory::System, vec![user.id]))
            .await?;
    }

    assert_eq!(service.mark_all_read(user.id).await?, 2);
    assert_eq!(service.mark_all_read(user.id).await?, 0);

    let receipt_id = service.list_mine(user.id, false, 0, 10).await?.notifications[0].receipt_id;
    service.delete(user.id, receipt_id).await?;

    let page = service.list_mine(user.id, false, 0, 10).await?;
    assert_eq!(page.total, 1);

    Ok(())
}
