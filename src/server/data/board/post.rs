//! Post repository. Deleted posts keep their row with `deleted_at` set.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::board::{CreatePostParams, Post, UpdatePostParams},
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        let now = Utc::now();
        let entity = entity::post::ActiveModel {
            board_id: ActiveValue::Set(params.board_id),
            author_id: ActiveValue::Set(params.author_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        let entity = entity::prelude::Post::find_by_id(id)
            .filter(entity::post::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets live posts of a board, newest first.
    pub async fn get_by_board_paginated(
        &self,
        board_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Post>, u64, u64), AppError> {
        let paginator = entity::prelude::Post::find()
            .filter(entity::post::Column::BoardId.eq(board_id))
            .filter(entity::post::Column::DeletedAt.is_null())
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let posts = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Post::from_entity)
            .collect();

        Ok((posts, totals.number_of_items, totals.number_of_pages))
    }

    /// Adds one to the view counter in a single statement.
    pub async fn increment_views(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::ViewCount,
                Expr::col(entity::post::Column::ViewCount).add(1),
            )
            .filter(entity::post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<(), AppError> {
        let mut active_model = entity::post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: i32, now: DateTime<Utc>) -> Result<(), AppError> {
        entity::post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            deleted_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Number of live comments per post. Posts without comments are absent.
    pub async fn comment_counts(&self, post_ids: &[i32]) -> Result<HashMap<i32, u64>, AppError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::PostId)
            .column_as(entity::comment::Column::Id.count(), "count")
            .filter(entity::comment::Column::PostId.is_in(post_ids.to_vec()))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .group_by(entity::comment::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        let counts = rows
            .into_iter()
            .map(|(post_id, count)| (post_id, Ord::max(count, 0) as u64))
            .collect();

        Ok(counts)
    }
}
