use super::*;

/// Tests storing one notification with a receipt per target.
///
/// Expected: each target sees the notification with its own silent flag
#[tokio::test]
async fn creates_receipt_per_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let loud = factory::create_user(db).await?;
    let quiet = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);

    repo.create_with_receipts(
        &params(vec![loud.id, quiet.id]),
        &[
            ReceiptTarget {
                user_id: loud.id,
                silent: false,
            },
            ReceiptTarget {
                user_id: quiet.id,
                silent: true,
            },
        ],
        Utc::now(),
    )
    .await?;

    let (loud_list, _, _) = repo.get_for_user_paginated(loud.id, false, 0, 10).await?;
    let (quiet_list, _, _) = repo.get_for_user_paginated(quiet.id, false, 0, 10).await?;

    assert_eq!(loud_list.len(), 1);
    assert!(!loud_list[0].silent);
    assert_eq!(loud_list[0].category, NotificationCategory::System);
    assert_eq!(quiet_list.len(), 1);
    assert!(quiet_list[0].silent);

    Ok(())
}
