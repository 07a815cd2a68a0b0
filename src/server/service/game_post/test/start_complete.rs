use super::*;

/// Tests the leader starting a post.
///
/// Expected: IN_PROGRESS, waiting list cleared, other members notified
#[tokio::test]
async fn start_clears_waiting_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, post.id, member.id).await?;
    let queued = factory::create_user(db).await?;
    factory::create_waiting(db, post.id, queued.id, "WAITING").await?;

    let detail = GamePostService::new(db)
        .start(&user(author.clone()), post.id)
        .await?;

    assert_eq!(detail.post.status, GamePostStatus::InProgress);
    assert!(detail.waiting.is_empty());
    let notifications = NotificationRepository::new(db);
    assert_eq!(notifications.count_unread(member.id).await?, 1);
    assert_eq!(notifications.count_unread(author.id).await?, 0);

    Ok(())
}

/// Tests the full lifecycle and that nothing leaves COMPLETED.
///
/// Expected: complete before start and start after complete both fail with Conflict
#[tokio::test]
async fn enforces_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let leader = user(author);
    let service = GamePostService::new(db);

    assert!(matches!(
        service.complete(&leader, post.id).await,
        Err(AppError::Conflict(_))
    ));

    service.start(&leader, post.id).await?;
    let detail = service.complete(&leader, post.id).await?;
    assert_eq!(detail.post.status, GamePostStatus::Completed);

    assert!(matches!(
        service.start(&leader, post.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests starting by a plain member.
///
/// Expected: Err(AppError::AuthErr(AccessDenied))
#[tokio::test]
async fn start_requires_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, post.id, member.id).await?;

    let result = GamePostService::new(db).start(&user(member), post.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
