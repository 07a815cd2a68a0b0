use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a profile row for an existing user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user owning the profile
/// - `nickname` - Unique display name
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
    nickname: impl Into<String>,
) -> Result<entity::user_profile::Model, DbErr> {
    entity::user_profile::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        nickname: ActiveValue::Set(nickname.into()),
        bio: ActiveValue::Set(None),
        avatar_url: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
