use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::board::{BoardRepository, ChannelRepository},
    error::AppError,
    model::board::{Board, Channel, CreateBoardParams, CreateChannelParams},
    util::validate::{require_length, require_slug},
};

const MAX_NAME_LENGTH: usize = 50;

/// Service for the channel and board structure of the community.
pub struct BoardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every channel with its boards.
    pub async fn list_channels(&self) -> Result<Vec<Channel>, AppError> {
        ChannelRepository::new(self.db).get_all_with_boards().await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Invalid name or slug
    /// - `Err(AppError::Conflict)` - Slug already used by another channel
    pub async fn create_channel(&self, params: CreateChannelParams) -> Result<Channel, AppError> {
        require_length("Name", &params.name, 1, MAX_NAME_LENGTH)?;
        require_slug(&params.slug)?;

        let txn = self.db.begin().await?;

        let repo = ChannelRepository::new(&txn);
        if repo.slug_taken(&params.slug).await? {
            return Err(AppError::Conflict(format!(
                "A channel with slug '{}' already exists",
                params.slug
            )));
        }
        let channel = repo.create(params).await?;

        txn.commit().await?;

        tracing::info!("Created channel {} ({})", channel.id, channel.slug);

        Ok(channel)
    }

    /// Creates a board inside a channel. Slugs only need to be unique per channel.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The channel does not exist
    /// - `Err(AppError::Conflict)` - Slug already used in this channel
    pub async fn create_board(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        require_length("Name", &params.name, 1, MAX_NAME_LENGTH)?;
        require_slug(&params.slug)?;

        let txn = self.db.begin().await?;

        if !ChannelRepository::new(&txn).exists(params.channel_id).await? {
            return Err(AppError::NotFound("Channel not found".to_string()));
        }

        let repo = BoardRepository::new(&txn);
        if repo.slug_taken(params.channel_id, &params.slug).await? {
            return Err(AppError::Conflict(format!(
                "A board with slug '{}' already exists in this channel",
                params.slug
            )));
        }
        let board = repo.create(params).await?;

        txn.commit().await?;

        Ok(board)
    }
}

#[cfg(test)]
mod test;
