use super::*;

/// Tests joining a post with a free slot.
///
/// Expected: Ok(Joined), the user is a member and the leader is notified
#[tokio::test]
async fn joins_with_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let joiner = new_user(db).await?;

    let outcome = GamePostService::new(db).join(&joiner, post.id).await?;

    assert_eq!(outcome, JoinOutcome::Joined);
    let participants = ParticipantRepository::new(db)
        .get_by_game_post(post.id)
        .await?;
    assert!(participants.iter().any(|p| p.is_member(joiner.id)));
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(author.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests taking the last slot.
///
/// Expected: Ok(Joined) and the post becomes FULL
#[tokio::test]
async fn last_slot_marks_full() -> Result<(), AppError> {
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
        .build()
        .await?;
    let joiner = new_user(db).await?;

    GamePostService::new(db).join(&joiner, post.id).await?;

    assert_eq!(load_post(db, post.id).await?.status, GamePostStatus::Full);

    Ok(())
}

/// Tests joining a full post.
///
/// Expected: Ok(Waitlisted) with 1-based positions in arrival order
#[tokio::test]
async fn waitlists_when_full() -> Result<(), AppError> {
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
    factory::create_guest(db, post.id, "Friend").await?;

    let first = new_user(db).await?;
    let second = new_user(db).await?;
    let service = GamePostService::new(db);

    assert_eq!(
        service.join(&first, post.id).await?,
        JoinOutcome::Waitlisted { position: 1 }
    );
    assert_eq!(
        service.join(&second, post.id).await?,
        JoinOutcome::Waitlisted { position: 2 }
    );

    Ok(())
}

/// Tests joining twice, as participant and from the waiting list.
///
/// Expected: Err(AppError::Conflict) in both cases
#[tokio::test]
async fn rejects_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let queued = factory::create_user(db).await?;
    factory::create_waiting(db, post.id, queued.id, "TIME_WAITING").await?;
    let service = GamePostService::new(db);

    assert!(matches!(
        service.join(&user(author), post.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.join(&user(queued), post.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests that joining consumes a pending invitation.
///
/// Expected: Ok(Joined) and the INVITED entry is gone
#[tokio::test]
async fn consumes_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_game_post_with_dependencies(db).await?;
    let invited = factory::create_user(db).await?;
    factory::create_waiting(db, post.id, invited.id, "INVITED").await?;

    let outcome = GamePostService::new(db)
        .join(&user(invited.clone()), post.id)
        .await?;

    assert_eq!(outcome, JoinOutcome::Joined);
    assert!(WaitingRepository::new(db)
        .find_by_user(post.id, invited.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests joining a post that already started.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_started_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let post = GamePostFactory::new(db, game.id, author.id)
        .status("IN_PROGRESS")
        .build()
        .await?;
    let joiner = new_user(db).await?;

    let result = GamePostService::new(db).join(&joiner, post.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests six users racing for the last free slot.
///
/// Expected: one Joined, five Waitlisted with distinct positions 1-5, and the roster
/// never exceeds the cap
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_respect_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .file_backed()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let post = GamePostFactory::new(db, game.id, author.id)
        .max_participants(2)
        .build()
        .await?;

    let post_id = post.id;
    let mut joins = tokio::task::JoinSet::new();
    for _ in 0..6 {
        let db = db.clone();
        let joiner = new_user(&db).await?;
        joins.spawn(async move { GamePostService::new(&db).join(&joiner, post_id).await });
    }

    let mut joined = 0;
    let mut positions = Vec::new();
    while let Some(outcome) = joins.join_next().await {
        match outcome.unwrap()? {
            JoinOutcome::Joined => joined += 1,
            JoinOutcome::Waitlisted { position } => positions.push(position),
        }
    }
    positions.sort_unstable();

    assert_eq!(joined, 1);
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        ParticipantRepository::new(db)
            .get_by_game_post(post.id)
            .await?
            .len(),
        2
    );
    assert_eq!(
        WaitingRepository::new(db)
            .get_by_game_post(post.id)
            .await?
            .len(),
        5
    );

    Ok(())
}
