use super::*;

/// Tests listing with a game filter and head counts.
///
/// Expected: only the filtered game's posts, with participant and waiting counts and the
/// leader name
#[tokio::test]
async fn filters_by_game_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = UserFactory::new(db).name("Captain").build().await?;
    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let post = factory::create_game_post(db, game.id, leader.id).await?;
    factory::create_game_post(db, other_game.id, leader.id).await?;

    let member = factory::create_user(db).await?;
    let queued = factory::create_user(db).await?;
    factory::create_member(db, post.id, member.id).await?;
    factory::create_waiting(db, post.id, queued.id, "WAITING").await?;

    let page = GamePostService::new(db)
        .list(GamePostFilter {
            game_id: Some(game.id),
            status: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(page.total, 1);
    let summary = &page.game_posts[0];
    assert_eq!(summary.post.id, post.id);
    assert_eq!(summary.game_name, game.name);
    assert_eq!(summary.participant_count, 2);
    assert_eq!(summary.waiting_count, 1);
    assert_eq!(summary.leader_name.as_deref(), Some("Captain"));

    Ok(())
}

/// Tests list ordering and the status filter.
///
/// Expected: earliest start first; completed posts excluded when filtering on OPEN
#[tokio::test]
async fn orders_by_start_time_and_filters_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let later = GamePostFactory::new(db, game.id, leader.id)
        .start_time(Utc::now() + Duration::hours(5))
        .build()
        .await?;
    let sooner = GamePostFactory::new(db, game.id, leader.id)
        .start_time(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    GamePostFactory::new(db, game.id, leader.id)
        .status("COMPLETED")
        .build()
        .await?;

    let page = GamePostService::new(db)
        .list(GamePostFilter {
            game_id: None,
            status: Some(GamePostStatus::Open),
            page: 0,
            per_page: 10,
        })
        .await?;

    let ids: Vec<i32> = page.game_posts.iter().map(|p| p.post.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
