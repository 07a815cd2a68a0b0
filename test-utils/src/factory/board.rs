use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a channel with a unique slug.
pub async fn create_channel(db: &DatabaseConnection) -> Result<entity::channel::Model, DbErr> {
    let id = next_id();
    entity::channel::ActiveModel {
        name: ActiveValue::Set(format!("Channel {}", id)),
        slug: ActiveValue::Set(format!("channel-{}", id)),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a board writable by `USER`.
pub async fn create_board(
    db: &DatabaseConnection,
    channel_id: i32,
) -> Result<entity::board::Model, DbErr> {
    create_board_with_write_role(db, channel_id, "USER").await
}

/// Creates a board with a custom minimum write role.
pub async fn create_board_with_write_role(
    db: &DatabaseConnection,
    channel_id: i32,
    write_role: &str,
) -> Result<entity::board::Model, DbErr> {
    let id = next_id();
    entity::board::ActiveModel {
        channel_id: ActiveValue::Set(channel_id),
        name: ActiveValue::Set(format!("Board {}", id)),
        slug: ActiveValue::Set(format!("board-{}", id)),
        write_role: ActiveValue::Set(write_role.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
