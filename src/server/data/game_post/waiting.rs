//! Waiting list repository for the `waiting_participant` table.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::game_post::WaitingStatus,
    server::{error::AppError, model::game_post::WaitingEntry},
};

pub struct WaitingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaitingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Waiting list of a post in arrival order.
    pub async fn get_by_game_post(&self, game_post_id: i32) -> Result<Vec<WaitingEntry>, AppError> {
        entity::prelude::WaitingParticipant::find()
            .filter(entity::waiting_participant::Column::GamePostId.eq(game_post_id))
            .order_by_asc(entity::waiting_participant::Column::CreatedAt)
            .order_by_asc(entity::waiting_participant::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(WaitingEntry::from_entity)
            .collect()
    }

    pub async fn get_by_game_posts(
        &self,
        game_post_ids: &[i32],
    ) -> Result<Vec<WaitingEntry>, AppError> {
        if game_post_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::WaitingParticipant::find()
            .filter(
                entity::waiting_participant::Column::GamePostId.is_in(game_post_ids.to_vec()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(WaitingEntry::from_entity)
            .collect()
    }

    pub async fn find_by_user(
        &self,
        game_post_id: i32,
        user_id: i32,
    ) -> Result<Option<WaitingEntry>, AppError> {
        entity::prelude::WaitingParticipant::find()
            .filter(entity::waiting_participant::Column::GamePostId.eq(game_post_id))
            .filter(entity::waiting_participant::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(WaitingEntry::from_entity)
            .transpose()
    }

    pub async fn create(
        &self,
        game_post_id: i32,
        user_id: i32,
        status: WaitingStatus,
        available_time: Option<DateTime<Utc>>,
        message: Option<String>,
    ) -> Result<WaitingEntry, AppError> {
        let entity = entity::waiting_participant::ActiveModel {
            game_post_id: ActiveValue::Set(game_post_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            available_time: ActiveValue::Set(available_time),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WaitingEntry::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::WaitingParticipant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the whole waiting list of a post.
    pub async fn delete_by_game_post(&self, game_post_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::WaitingParticipant::delete_many()
            .filter(entity::waiting_participant::Column::GamePostId.eq(game_post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
