use super::*;

/// Tests the uniqueness check used by create and rename.
///
/// Expected: taken for other games, free for the game itself
#[tokio::test]
async fn excludes_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db).name("Lost Ark").build().await?;
    let repo = GameRepository::new(db);

    assert!(repo.name_taken("Lost Ark", None).await?);
    assert!(!repo.name_taken("Lost Ark", Some(game.id)).await?);
    assert!(!repo.name_taken("Dota 2", None).await?);

    Ok(())
}
