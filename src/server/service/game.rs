use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, game_post::GamePostRepository},
    error::AppError,
    model::{
        game::{CreateGameParams, Game, UpdateGameParams},
        game_post::{MAX_PARTICIPANTS, MIN_PARTICIPANTS},
    },
    util::validate::{require_http_url, require_length, require_range},
};

const MAX_GAME_NAME_LENGTH: usize = 50;

/// Service for the game catalog game posts are created from.
pub struct GameService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        GameRepository::new(self.db).get_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Invalid name, image URL or capacity
    /// - `Err(AppError::Conflict)` - A game with that name exists
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        require_length("Name", &params.name, 1, MAX_GAME_NAME_LENGTH)?;
        if let Some(image_url) = &params.image_url {
            require_http_url("Image URL", image_url)?;
        }
        require_range(
            "Default max participants",
            params.default_max_participants,
            MIN_PARTICIPANTS,
            MAX_PARTICIPANTS,
        )?;

        let game_repo = GameRepository::new(self.db);
        if game_repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "A game named '{}' already exists",
                params.name
            )));
        }

        let game = game_repo.create(params).await?;
        tracing::info!("Created game {} ({})", game.id, game.name);

        Ok(game)
    }

    pub async fn update(&self, id: i32, params: UpdateGameParams) -> Result<Game, AppError> {
        if let Some(name) = &params.name {
            require_length("Name", name, 1, MAX_GAME_NAME_LENGTH)?;
        }
        if let Some(Some(image_url)) = &params.image_url {
            require_http_url("Image URL", image_url)?;
        }
        if let Some(max) = params.default_max_participants {
            require_range(
                "Default max participants",
                max,
                MIN_PARTICIPANTS,
                MAX_PARTICIPANTS,
            )?;
        }

        let game_repo = GameRepository::new(self.db);
        if let Some(name) = &params.name {
            if game_repo.name_taken(name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "A game named '{}' already exists",
                    name
                )));
            }
        }

        game_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Deletes a game that no game post refers to.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Game posts still use the game
    /// - `Err(AppError::NotFound)` - No game with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post_count = GamePostRepository::new(&txn).count_by_game(id).await?;
        if post_count > 0 {
            return Err(AppError::Conflict(format!(
                "The game is used by {} game post(s)",
                post_count
            )));
        }

        if !GameRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        txn.commit().await?;
        tracing::info!("Deleted game {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod test;
