use super::*;

/// Tests listing games alphabetically.
///
/// Expected: Ok with games ordered by name
#[tokio::test]
async fn lists_games_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db).name("Valorant").build().await?;
    factory::game::GameFactory::new(db).name("Apex").build().await?;

    let games = GameRepository::new(db).get_all().await?;
    let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Apex", "Valorant"]);

    Ok(())
}
