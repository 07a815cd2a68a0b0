use super::*;

/// Tests deleting an unused game.
///
/// Expected: Ok(()) and the game is gone
#[tokio::test]
async fn deletes_unused_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    service.delete(game.id).await?;

    assert!(matches!(
        service.get(game.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a game that game posts refer to.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_game_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game, _) = factory::helpers::create_game_post_with_dependencies(db).await?;

    let result = GameService::new(db).delete(game.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
