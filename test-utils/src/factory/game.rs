use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog games.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    default_max_participants: i32,
}

impl<'a> GameFactory<'a> {
    /// Defaults: name `"Game {id}"`, default max participants `4`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
            default_max_participants: 4,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn default_max_participants(mut self, max: i32) -> Self {
        self.default_max_participants = max;
        self
    }

    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            image_url: ActiveValue::Set(None),
            default_max_participants: ActiveValue::Set(self.default_max_participants),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
