use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::board::Comment};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            author_id: ActiveValue::Set(author_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Live comments of a post, oldest first.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        Ok(comments)
    }

    pub async fn soft_delete(&self, id: i32, now: DateTime<Utc>) -> Result<(), AppError> {
        entity::comment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            deleted_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
