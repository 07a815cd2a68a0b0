//! Game post data repositories.
//!
//! `GamePostRepository` owns the `game_post` table. Participants and waiting-list
//! entries live in their own repositories under this module.

pub mod participant;
pub mod waiting;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::game_post::GamePostStatus,
    server::{
        error::AppError,
        model::game_post::{CreateGamePostParams, GamePost, GamePostFilter, UpdateGamePostParams},
    },
};

pub struct GamePostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GamePostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an `OPEN` game post. The leader participant is added separately.
    ///
    /// # Arguments
    /// - `author_id` - User creating the post
    /// - `max_participants` - Resolved capacity (the params value or the game default)
    /// - `params` - Remaining post fields
    pub async fn create(
        &self,
        author_id: i32,
        max_participants: i32,
        params: CreateGamePostParams,
    ) -> Result<GamePost, AppError> {
        let now = Utc::now();
        let entity = entity::game_post::ActiveModel {
            game_id: ActiveValue::Set(params.game_id),
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            max_participants: ActiveValue::Set(max_participants),
            status: ActiveValue::Set(GamePostStatus::Open.as_str().to_string()),
            start_time: ActiveValue::Set(params.start_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GamePost::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GamePost>, AppError> {
        entity::prelude::GamePost::find_by_id(id)
            .one(self.db)
            .await?
            .map(GamePost::from_entity)
            .transpose()
    }

    /// Writes to the post row before reading it.
    ///
    /// Inside a transaction this takes the write lock up front (a row lock on Postgres,
    /// the database write lock on SQLite), so concurrent roster changes to the same post
    /// run one after another instead of failing on lock upgrade.
    ///
    /// # Returns
    /// - `Ok(Some(GamePost))` - The locked post
    /// - `Ok(None)` - No post with that ID
    pub async fn lock_for_update(&self, id: i32) -> Result<Option<GamePost>, AppError> {
        let result = entity::prelude::GamePost::update_many()
            .col_expr(
                entity::game_post::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::game_post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Gets game posts matching the filter, earliest start first.
    ///
    /// # Returns
    /// - `Ok((posts, total, total_pages))` - Posts on the requested zero-indexed page
    pub async fn get_paginated(
        &self,
        filter: &GamePostFilter,
    ) -> Result<(Vec<GamePost>, u64, u64), AppError> {
        let mut query = entity::prelude::GamePost::find();
        if let Some(game_id) = filter.game_id {
            query = query.filter(entity::game_post::Column::GameId.eq(game_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::game_post::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::game_post::Column::StartTime)
            .order_by_asc(entity::game_post::Column::Id)
            .paginate(self.db, filter.per_page);

        let totals = paginator.num_items_and_pages().await?;
        let posts = paginator
            .fetch_page(filter.page)
            .await?
            .into_iter()
            .map(GamePost::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, totals.number_of_items, totals.number_of_pages))
    }

    /// Applies field changes. Status is managed separately by `set_status`.
    pub async fn update(&self, id: i32, params: UpdateGamePostParams) -> Result<(), AppError> {
        let Some(existing) = entity::prelude::GamePost::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active_model: entity::game_post::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(max) = params.max_participants {
            active_model.max_participants = ActiveValue::Set(max);
        }
        if let Some(start_time) = params.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn set_status(&self, id: i32, status: GamePostStatus) -> Result<(), AppError> {
        entity::prelude::GamePost::update_many()
            .col_expr(
                entity::game_post::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::game_post::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::game_post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a post together with its participants and waiting list.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::WaitingParticipant::delete_many()
            .filter(entity::waiting_participant::Column::GamePostId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::GameParticipant::delete_many()
            .filter(entity::game_participant::Column::GamePostId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::GamePost::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// IDs of `OPEN`/`FULL` posts whose start time has passed.
    pub async fn get_due_to_start(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError> {
        let ids = entity::prelude::GamePost::find()
            .filter(entity::game_post::Column::Status.is_in([
                GamePostStatus::Open.as_str(),
                GamePostStatus::Full.as_str(),
            ]))
            .filter(entity::game_post::Column::StartTime.lte(now))
            .order_by_asc(entity::game_post::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        Ok(ids)
    }

    /// IDs of `IN_PROGRESS` posts that started at or before `started_before`.
    pub async fn get_due_to_complete(
        &self,
        started_before: DateTime<Utc>,
    ) -> Result<Vec<i32>, AppError> {
        let ids = entity::prelude::GamePost::find()
            .filter(entity::game_post::Column::Status.eq(GamePostStatus::InProgress.as_str()))
            .filter(entity::game_post::Column::StartTime.lte(started_before))
            .order_by_asc(entity::game_post::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        Ok(ids)
    }

    pub async fn count_by_game(&self, game_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::GamePost::find()
            .filter(entity::game_post::Column::GameId.eq(game_id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod test;
