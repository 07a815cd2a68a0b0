//! Participant and waiting-list factories.
//!
//! Rows are inserted as-is; callers are responsible for keeping the post status
//! consistent with the participant count when a test depends on it.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a non-leader `MEMBER` to a game post.
pub async fn create_member(
    db: &DatabaseConnection,
    game_post_id: i32,
    user_id: i32,
) -> Result<entity::game_participant::Model, DbErr> {
    entity::game_participant::ActiveModel {
        game_post_id: ActiveValue::Set(game_post_id),
        user_id: ActiveValue::Set(Some(user_id)),
        guest_name: ActiveValue::Set(None),
        participant_type: ActiveValue::Set("MEMBER".to_string()),
        is_leader: ActiveValue::Set(false),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a `GUEST` to a game post.
pub async fn create_guest(
    db: &DatabaseConnection,
    game_post_id: i32,
    name: impl Into<String>,
) -> Result<entity::game_participant::Model, DbErr> {
    entity::game_participant::ActiveModel {
        game_post_id: ActiveValue::Set(game_post_id),
        user_id: ActiveValue::Set(None),
        guest_name: ActiveValue::Set(Some(name.into())),
        participant_type: ActiveValue::Set("GUEST".to_string()),
        is_leader: ActiveValue::Set(false),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a waiting-list entry with the given status.
///
/// `TIME_WAITING` entries get an `available_time` one hour from now; use
/// [`create_waiting_at`] to control timestamps.
pub async fn create_waiting(
    db: &DatabaseConnection,
    game_post_id: i32,
    user_id: i32,
    status: &str,
) -> Result<entity::waiting_participant::Model, DbErr> {
    create_waiting_at(db, game_post_id, user_id, status, Utc::now()).await
}

/// Adds a waiting-list entry with an explicit creation time.
pub async fn create_waiting_at(
    db: &DatabaseConnection,
    game_post_id: i32,
    user_id: i32,
    status: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::waiting_participant::Model, DbErr> {
    let available_time = (status == "TIME_WAITING").then(|| Utc::now() + Duration::hours(1));

    entity::waiting_participant::ActiveModel {
        game_post_id: ActiveValue::Set(game_post_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        available_time: ActiveValue::Set(available_time),
        message: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
