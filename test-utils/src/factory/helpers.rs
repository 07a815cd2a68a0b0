//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author, a game and an open game post led by that author.
///
/// # Returns
/// - `Ok((author, game, game_post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::game_post::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let game = crate::factory::game::create_game(db).await?;
    let post = crate::factory::game_post::create_game_post(db, game.id, author.id).await?;

    Ok((author, game, post))
}

/// Creates a channel with one board writable by `USER`.
///
/// # Returns
/// - `Ok((channel, board))` - Created channel and board
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_channel(
    db: &DatabaseConnection,
) -> Result<(entity::channel::Model, entity::board::Model), DbErr> {
    let channel = crate::factory::board::create_channel(db).await?;
    let board = crate::factory::board::create_board(db, channel.id).await?;

    Ok((channel, board))
}
