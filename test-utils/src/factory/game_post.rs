//! Game post factory.
//!
//! Inserts the post together with its author as the leading `MEMBER`, matching what the
//! create operation produces.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct GamePostFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    author_id: i32,
    title: String,
    max_participants: i32,
    status: String,
    start_time: DateTime<Utc>,
}

impl<'a> GamePostFactory<'a> {
    /// Defaults: 4 slots, status `OPEN`, starting in two hours.
    pub fn new(db: &'a DatabaseConnection, game_id: i32, author_id: i32) -> Self {
        Self {
            db,
            game_id,
            author_id,
            title: format!("Game post {}", next_id()),
            max_participants: 4,
            status: "OPEN".to_string(),
            start_time: Utc::now() + Duration::hours(2),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn max_participants(mut self, max: i32) -> Self {
        self.max_participants = max;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub async fn build(self) -> Result<entity::game_post::Model, DbErr> {
        let now = Utc::now();
        let post = entity::game_post::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            max_participants: ActiveValue::Set(self.max_participants),
            status: ActiveValue::Set(self.status),
            start_time: ActiveValue::Set(self.start_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::game_participant::ActiveModel {
            game_post_id: ActiveValue::Set(post.id),
            user_id: ActiveValue::Set(Some(self.author_id)),
            guest_name: ActiveValue::Set(None),
            participant_type: ActiveValue::Set("MEMBER".to_string()),
            is_leader: ActiveValue::Set(true),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(post)
    }
}

/// Creates an open four-slot game post led by `author_id`.
pub async fn create_game_post(
    db: &DatabaseConnection,
    game_id: i32,
    author_id: i32,
) -> Result<entity::game_post::Model, DbErr> {
    GamePostFactory::new(db, game_id, author_id).build().await
}
