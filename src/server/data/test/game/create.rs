use super::*;

/// Tests inserting a game.
///
/// Expected: Ok with the game persisted and retrievable by ID
#[tokio::test]
async fn creates_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo
        .create(CreateGameParams {
            name: "League of Legends".to_string(),
            image_url: Some("https://cdn.example.com/lol.png".to_string()),
            default_max_participants: 5,
        })
        .await?;

    let found = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(found.name, "League of Legends");
    assert_eq!(found.default_max_participants, 5);

    Ok(())
}
