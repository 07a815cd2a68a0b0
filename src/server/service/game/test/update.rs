use super::*;

/// Tests renaming a game and clearing its image.
///
/// Expected: Ok(Game) with the new name and no image
#[tokio::test]
async fn updates_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let updated = GameService::new(db)
        .update(
            game.id,
            UpdateGameParams {
                name: Some("Renamed".to_string()),
                image_url: Some(None),
                default_max_participants: Some(8),
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.image_url, None);
    assert_eq!(updated.default_max_participants, 8);

    Ok(())
}

/// Tests renaming a game to another game's name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_name_of_other_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::game::GameFactory::new(db).name("First").build().await?;
    let second = factory::create_game(db).await?;

    let result = GameService::new(db)
        .update(
            second.id,
            UpdateGameParams {
                name: Some(first.name.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a missing game.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_game_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db)
        .update(42, UpdateGameParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
