use super::*;

/// Tests that new notices start as drafts.
///
/// Expected: Ok with is_published false and no published_at
#[tokio::test]
async fn creates_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;
    let notice = NoticeRepository::new(db)
        .create(
            admin.id,
            CreateNoticeParams {
                title: "Server maintenance".to_string(),
                content: "Down at **03:00**".to_string(),
                priority: 3,
                is_pinned: false,
            },
        )
        .await?;

    assert!(!notice.is_published);
    assert!(notice.published_at.is_none());
    assert_eq!(notice.priority, 3);
    assert_eq!(notice.author_id, admin.id);

    Ok(())
}
