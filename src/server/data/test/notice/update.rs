use super::*;

/// Expected: only the given fields change
#[tokio::test]
async fn updates_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let notice = factory::notice::NoticeFactory::new(db, admin.id)
        .title("Original")
        .priority(2)
        .build()
        .await?;

    let updated = NoticeRepository::new(db)
        .update(
            notice.id,
            UpdateNoticeParams {
                content: Some("Updated body".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.content, "Updated body");
    assert_eq!(updated.priority, 2);

    Ok(())
}
