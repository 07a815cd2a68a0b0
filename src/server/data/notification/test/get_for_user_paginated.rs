use super::*;

/// Tests newest-first ordering and the unread filter.
///
/// Expected: newest first; unread_only drops read receipts
#[tokio::test]
async fn orders_newest_first_and_filters_unread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    let target = [ReceiptTarget {
        user_id: user.id,
        silent: false,
    }];
    let now = Utc::now();

    repo.create_with_receipts(&params(vec![user.id]), &target, now - Duration::hours(2))
        .await?;
    repo.create_with_receipts(&params(vec![user.id]), &target, now)
        .await?;

    let (all, total, _) = repo.get_for_user_paginated(user.id, false, 0, 10).await?;
    assert_eq!(total, 2);
    assert!(all[0].created_at > all[1].created_at);

    repo.mark_read(all[1].receipt_id, now).await?;

    let (unread, unread_total, _) = repo.get_for_user_paginated(user.id, true, 0, 10).await?;
    assert_eq!(unread_total, 1);
    assert_eq!(unread[0].receipt_id, all[0].receipt_id);
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}
