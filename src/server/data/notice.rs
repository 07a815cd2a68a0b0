//! Notice repository.
//!
//! Deleted notices keep their row with `deleted_at` set and are excluded from every query.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::notice::{CreateNoticeParams, Notice, UpdateNoticeParams},
};

pub struct NoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn live() -> Select<entity::prelude::Notice> {
        entity::prelude::Notice::find().filter(entity::notice::Column::DeletedAt.is_null())
    }

    /// Inserts an unpublished notice.
    pub async fn create(
        &self,
        author_id: i32,
        params: CreateNoticeParams,
    ) -> Result<Notice, AppError> {
        let now = Utc::now();
        let entity = entity::notice::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            is_published: ActiveValue::Set(false),
            is_pinned: ActiveValue::Set(params.is_pinned),
            priority: ActiveValue::Set(params.priority),
            published_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notice::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notice>, AppError> {
        let entity = Self::live()
            .filter(entity::notice::Column::Id.eq(id))
            .one(self.db)
            .await?;

        Ok(entity.map(Notice::from_entity))
    }

    /// Gets notices pinned first, then by priority and publish time, both descending.
    ///
    /// # Arguments
    /// - `published_only` - Leave out drafts and unpublished notices
    ///
    /// # Returns
    /// - `Ok((notices, total, total_pages))` - Notices on the requested zero-indexed page
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notice>, u64, u64), AppError> {
        let mut query = Self::live();
        if published_only {
            query = query.filter(entity::notice::Column::IsPublished.eq(true));
        }

        let paginator = query
            .order_by_desc(entity::notice::Column::IsPinned)
            .order_by_desc(entity::notice::Column::Priority)
            .order_by_desc(entity::notice::Column::PublishedAt)
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_desc(entity::notice::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let notices = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Notice::from_entity)
            .collect();

        Ok((notices, totals.number_of_items, totals.number_of_pages))
    }

    /// Writes back every mutable field of `notice`.
    async fn save(&self, notice: Notice) -> Result<Notice, AppError> {
        let entity = entity::notice::ActiveModel {
            id: ActiveValue::Unchanged(notice.id),
            title: ActiveValue::Set(notice.title),
            content: ActiveValue::Set(notice.content),
            is_published: ActiveValue::Set(notice.is_published),
            is_pinned: ActiveValue::Set(notice.is_pinned),
            priority: ActiveValue::Set(notice.priority),
            published_at: ActiveValue::Set(notice.published_at),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Notice::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(None)` - No live notice with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateNoticeParams,
    ) -> Result<Option<Notice>, AppError> {
        let Some(mut notice) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(title) = params.title {
            notice.title = title;
        }
        if let Some(content) = params.content {
            notice.content = content;
        }
        if let Some(priority) = params.priority {
            notice.priority = priority;
        }

        Ok(Some(self.save(notice).await?))
    }

    /// Publishes or unpublishes a notice. `published_at` is only set on the first publish.
    pub async fn set_published(
        &self,
        id: i32,
        published: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<Notice>, AppError> {
        let Some(mut notice) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        notice.is_published = published;
        if published && notice.published_at.is_none() {
            notice.published_at = Some(now);
        }

        Ok(Some(self.save(notice).await?))
    }

    pub async fn set_pinned(&self, id: i32, pinned: bool) -> Result<Option<Notice>, AppError> {
        let Some(mut notice) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        notice.is_pinned = pinned;

        Ok(Some(self.save(notice).await?))
    }

    /// Soft-deletes a notice.
    ///
    /// # Returns
    /// - `Ok(false)` - No live notice with that ID
    pub async fn soft_delete(&self, id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        let Some(notice) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        entity::notice::ActiveModel {
            id: ActiveValue::Unchanged(notice.id),
            deleted_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(true)
    }
}
