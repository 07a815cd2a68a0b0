use super::*;

/// Tests deleting a post with members and a queue.
///
/// Expected: Ok(()), the post and its rows are gone and members are notified
#[tokio::test]
async fn deletes_and_notifies() -> Result<(), AppError> {
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

    GamePostService::new(db)
        .delete(&user(author), post.id)
        .await?;

    assert!(GamePostRepository::new(db)
        .find_by_id(post.id)
        .await?
        .is_none());
    assert!(WaitingRepository::new(db)
        .get_by_game_post(post.id)
        .await?
        .is_empty());
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(member.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests deleting a post by a non-leader and a missing post.
///
/// Expected: AccessDenied and NotFound
#[tokio::test]
async fn rejects_outsider_and_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let outsider = new_user(db).await?;
    let service = GamePostService::new(db);

    assert!(matches!(
        service.delete(&outsider, post.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.delete(&outsider, 9999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
