use super::*;

/// Tests a partial update.
///
/// Expected: only the given fields change
#[tokio::test]
async fn updates_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let notice = factory::create_notice(db, admin.id).await?;

    let detail = NoticeService::new(db)
        .update(
            notice.id,
            UpdateNoticeParams {
                priority: Some(9),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(detail.notice.priority, 9);
    assert_eq!(detail.notice.title, notice.title);

    Ok(())
}

/// Tests updating a deleted notice.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_deleted_notice() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let notice = factory::create_notice(db, admin.id).await?;
    let service = NoticeService::new(db);
    service.delete(notice.id).await?;

    let result = service
        .update(
            notice.id,
            UpdateNoticeParams {
                title: Some("Revived".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
