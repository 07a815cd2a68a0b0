//! Channel and board repositories. Posts and comments live in submodules.

pub mod comment;
pub mod post;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::board::{Board, Channel, CreateBoardParams, CreateChannelParams},
};

pub struct ChannelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChannelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, AppError> {
        let entity = entity::channel::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Channel::from_entity(entity, Vec::new()))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Channel::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn slug_taken(&self, slug: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Channel::find()
            .filter(entity::channel::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Every channel with its boards, both in creation order.
    pub async fn get_all_with_boards(&self) -> Result<Vec<Channel>, AppError> {
        let rows = entity::prelude::Channel::find()
            .order_by_asc(entity::channel::Column::Id)
            .find_with_related(entity::prelude::Board)
            .order_by_asc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(channel, boards)| {
                let boards = boards
                    .into_iter()
                    .map(Board::from_entity)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Channel::from_entity(channel, boards))
            })
            .collect()
    }
}

pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let entity = entity::board::ActiveModel {
            channel_id: ActiveValue::Set(params.channel_id),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            write_role: ActiveValue::Set(params.write_role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Board::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Board>, AppError> {
        entity::prelude::Board::find_by_id(id)
            .one(self.db)
            .await?
            .map(Board::from_entity)
            .transpose()
    }

    /// Board slugs are unique within a channel.
    pub async fn slug_taken(&self, channel_id: i32, slug: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Board::find()
            .filter(entity::board::Column::ChannelId.eq(channel_id))
            .filter(entity::board::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod test;
