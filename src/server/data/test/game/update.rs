use super::*;

/// Tests that fields left out of an update are kept.
///
/// Expected: Ok with only the default capacity changed
#[tokio::test]
async fn keeps_unset_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .name("Overwatch")
        .default_max_participants(5)
        .build()
        .await?;

    let updated = GameRepository::new(db)
        .update(
            game.id,
            UpdateGameParams {
                default_max_participants: Some(6),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Overwatch");
    assert_eq!(updated.default_max_participants, 6);

    Ok(())
}

/// Expected: Ok(None) when the game does not exist
#[tokio::test]
async fn returns_none_for_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db)
        .update(7, UpdateGameParams::default())
        .await?;
    assert!(result.is_none());

    Ok(())
}
