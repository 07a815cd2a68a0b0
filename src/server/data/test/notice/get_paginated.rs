use super::*;

/// Tests the public ordering: pinned, then priority, then newest publish time.
///
/// Expected: Ok with drafts excluded and published notices in display order
#[tokio::test]
async fn orders_pinned_then_priority_then_recency() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let now = Utc::now();

    let old_low = factory::notice::NoticeFactory::new(db, admin.id)
        .published_at(now - Duration::days(3))
        .build()
        .await?;
    let new_low = factory::notice::NoticeFactory::new(db, admin.id)
        .published_at(now - Duration::days(1))
        .build()
        .await?;
    let high = factory::notice::NoticeFactory::new(db, admin.id)
        .published_at(now - Duration::days(5))
        .priority(5)
        .build()
        .await?;
    let pinned = factory::notice::NoticeFactory::new(db, admin.id)
        .published_at(now - Duration::days(10))
        .pinned(true)
        .build()
        .await?;
    factory::create_notice(db, admin.id).await?;

    let (notices, total, _) = NoticeRepository::new(db)
        .get_paginated(true, 0, 10)
        .await?;

    assert_eq!(total, 4);
    let ids: Vec<i32> = notices.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![pinned.id, high.id, new_low.id, old_low.id]);

    Ok(())
}

/// Tests that the admin listing includes drafts.
///
/// Expected: Ok with every live notice counted
#[tokio::test]
async fn includes_drafts_for_admin_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    factory::create_notice(db, admin.id).await?;
    factory::notice::NoticeFactory::new(db, admin.id)
        .published_at(Utc::now())
        .build()
        .await?;

    let (_, total, _) = NoticeRepository::new(db)
        .get_paginated(false, 0, 10)
        .await?;
    assert_eq!(total, 2);

    Ok(())
}
