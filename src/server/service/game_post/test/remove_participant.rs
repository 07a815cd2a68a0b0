use super::*;

/// Tests removing a guest from a full post with a queue.
///
/// Expected: Ok(()), the guest is gone and the first WAITING user is promoted
#[tokio::test]
async fn removes_and_promotes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let post = GamePostFactory::new(db, game.id, author.id)
        .max_participants(2)
        .status("FULL")
        .build()
        .await?;
    let guest = factory::create_guest(db, post.id, "Friend").await?;
    let queued = factory::create_user(db).await?;
    factory::create_waiting(db, post.id, queued.id, "WAITING").await?;

    GamePostService::new(db)
        .remove_participant(&user(author), post.id, guest.id)
        .await?;

    let participants = ParticipantRepository::new(db)
        .get_by_game_post(post.id)
        .await?;
    assert!(participants.iter().all(|p| p.id != guest.id));
    assert!(participants.iter().any(|p| p.is_member(queued.id)));
    assert_eq!(load_post(db, post.id).await?.status, GamePostStatus::Full);

    Ok(())
}

/// Tests removing the leader.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_removing_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let leader_participant = ParticipantRepository::new(db)
        .get_by_game_post(post.id)
        .await?
        .remove(0);

    let result = GamePostService::new(db)
        .remove_participant(&user(author), post.id, leader_participant.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an admin removing a member of someone else's post.
///
/// Expected: Ok(()) and the member is removed
#[tokio::test]
async fn admin_may_remove() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let admin = user(factory::user::create_user_with_role(db, "ADMIN").await?);
    let member = factory::create_user(db).await?;
    let participant = factory::create_member(db, post.id, member.id).await?;

    GamePostService::new(db)
        .remove_participant(&admin, post.id, participant.id)
        .await?;

    let participants = ParticipantRepository::new(db)
        .get_by_game_post(post.id)
        .await?;
    assert!(!participants.iter().any(|p| p.is_member(member.id)));

    Ok(())
}
