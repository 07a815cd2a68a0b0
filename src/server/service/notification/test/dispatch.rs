use super::*;

/// Tests delivery to several recipients with duplicates.
///
/// Expected: Ok(2), one receipt per distinct user
#[tokio::test]
async fn collapses_duplicate_recipients() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let delivered = NotificationService::new(db)
        .dispatch(params(
            NotificationCategory::GamePost,
            vec![first.id, second.id, first.id],
        ))
        .await?;

    assert_eq!(delivered, 2);
    let repo = NotificationRepository::new(db);
    assert_eq!(repo.count_unread(first.id).await?, 1);
    assert_eq!(repo.count_unread(second.id).await?, 1);

    Ok(())
}

/// Tests that a disabled category suppresses the receipt.
///
/// Expected: Ok(1), only the user with the category enabled receives it
#[tokio::test]
async fn skips_users_with_category_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let muted = factory::create_user(db).await?;
    let listening = factory::create_user(db).await?;
    NotificationSettingRepository::new(db)
        .save(&NotificationSettings {
            comment_enabled: false,
            ..NotificationSettings::defaults_for(muted.id)
        })
        .await?;

    let delivered = NotificationService::new(db)
        .dispatch(params(
            NotificationCategory::Comment,
            vec![muted.id, listening.id],
        ))
        .await?;

    assert_eq!(delivered, 1);
    assert_eq!(
        NotificationRepository::new(db).count_unread(muted.id).await?,
        0
    );

    Ok(())
}

/// Tests that SYSTEM notifications ignore the category toggles.
///
/// Expected: Ok(1) even with every toggle off
#[tokio::test]
async fn system_ignores_toggles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    NotificationSettingRepository::new(db)
        .save(&NotificationSettings {
            game_post_enabled: false,
            notice_enabled: false,
            comment_enabled: false,
            ..NotificationSettings::defaults_for(user.id)
        })
        .await?;

    let delivered = NotificationService::new(db)
        .dispatch(params(NotificationCategory::System, vec![user.id]))
        .await?;

    assert_eq!(delivered, 1);

    Ok(())
}

/// Tests silent delivery inside the do-not-disturb window.
///
/// The window 23:00-07:00 wraps midnight; 01:30 UTC is inside it, 12:00 is not.
///
/// Expected: silent receipt at 01:30, audible receipt at 12:00
#[tokio::test]
async fn silences_inside_dnd_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    NotificationSettingRepository::new(db)
        .save(&NotificationSettings {
            dnd_enabled: true,
            ..NotificationSettings::defaults_for(user.id)
        })
        .await?;

    let service = NotificationService::new(db);
    let night = Utc.with_ymd_and_hms(2026, 5, 2, 1, 30, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2026, 5, 2, 12, 0, 0).unwrap();
    service
        .dispatch_at(params(NotificationCategory::GamePost, vec![user.id]), night)
        .await?;
    service
        .dispatch_at(params(NotificationCategory::GamePost, vec![user.id]), noon)
        .await?;

    let (notifications, _, _) = NotificationRepository::new(db)
        .get_for_user_paginated(user.id, false, 0, 10)
        .await?;

    assert_eq!(notifications.len(), 2);
    let silent: Vec<bool> = notifications.iter().map(|n| n.silent).collect();
    assert!(silent.contains(&true));
    assert!(silent.contains(&false));
    let noon_receipt = notifications
        .iter()
        .find(|n| n.created_at == noon)
        .unwrap();
    assert!(!noon_receipt.silent);

    Ok(())
}

/// Tests a dispatch whose recipients all opted out.
///
/// Expected: Ok(0) and no rows written
#[tokio::test]
async fn writes_nothing_without_recipients() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let delivered = NotificationService::new(db)
        .dispatch(params(NotificationCategory::Notice, vec![]))
        .await?;

    assert_eq!(delivered, 0);
    let count = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
