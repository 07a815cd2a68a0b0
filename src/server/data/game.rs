//! Game catalog repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::game::{CreateGameParams, Game, UpdateGameParams},
};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(params.name),
            image_url: ActiveValue::Set(params.image_url),
            default_max_participants: ActiveValue::Set(params.default_max_participants),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, AppError> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets every game ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Game::from_entity)
            .collect();

        Ok(games)
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Game>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Game::from_entity)
            .collect();

        Ok(games)
    }

    /// Checks whether `name` is used by a game other than `except_id`.
    pub async fn name_taken(&self, name: &str, except_id: Option<i32>) -> Result<bool, AppError> {
        let mut query =
            entity::prelude::Game::find().filter(entity::game::Column::Name.eq(name));

        if let Some(id) = except_id {
            query = query.filter(entity::game::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies changes to an existing game.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that ID
    pub async fn update(&self, id: i32, params: UpdateGameParams) -> Result<Option<Game>, AppError> {
        let Some(existing) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(max) = params.default_max_participants {
            active_model.default_max_participants = ActiveValue::Set(max);
        }
        let entity = active_model.update(self.db).await?;

        Ok(Some(Game::from_entity(entity)))
    }

    /// Deletes a game.
    ///
    /// # Returns
    /// - `Ok(true)` - The game was deleted
    /// - `Ok(false)` - No game with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
