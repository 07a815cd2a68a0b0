use super::*;

/// Tests reusing a board slug in a different channel.
///
/// Expected: Ok; slugs are unique per channel only
#[tokio::test]
async fn slug_unique_per_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_channel(db).await?;
    let second = factory::create_channel(db).await?;
    let service = BoardService::new(db);

    service.create_board(board_params(first.id, "free")).await?;
    let board = service.create_board(board_params(second.id, "free")).await?;

    assert_eq!(board.channel_id, second.id);
    assert!(matches!(
        service.create_board(board_params(first.id, "free")).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests creating a board in a missing channel.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardService::new(db)
        .create_board(board_params(404, "free"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
