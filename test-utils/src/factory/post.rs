use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a post on a board.
pub async fn create_post(
    db: &DatabaseConnection,
    board_id: i32,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    let now = Utc::now();
    entity::post::ActiveModel {
        board_id: ActiveValue::Set(board_id),
        author_id: ActiveValue::Set(author_id),
        title: ActiveValue::Set(format!("Post {}", next_id())),
        content: ActiveValue::Set("Hello".to_string()),
        view_count: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
