//! Notice service: announcements written by admins.
//!
//! Notices are drafts until published. Publishing for the first time notifies every
//! active user; unpublishing hides a notice without losing its original publish time.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{notification::NotificationCategory, user::Role},
    server::{
        data::{notice::NoticeRepository, user::UserRepository},
        error::AppError,
        model::{
            notice::{
                CreateNoticeParams, Notice, NoticeDetail, PaginatedNotices, UpdateNoticeParams,
                MAX_PRIORITY, MIN_PRIORITY,
            },
            notification::DispatchNotificationParams,
            user::User,
        },
        service::notification::NotificationService,
        util::validate::{require_length, require_range},
    },
};

const MAX_TITLE_LENGTH: usize = 200;
const MAX_CONTENT_LENGTH: usize = 20000;

pub struct NoticeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published notices: pinned first, then priority, then newest publish.
    pub async fn list_published(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotices, AppError> {
        self.list(true, page, per_page).await
    }

    /// Every live notice, drafts included.
    pub async fn list_all(&self, page: u64, per_page: u64) -> Result<PaginatedNotices, AppError> {
        self.list(false, page, per_page).await
    }

    async fn list(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotices, AppError> {
        let (notices, total, total_pages) = NoticeRepository::new(self.db)
            .get_paginated(published_only, page, per_page)
            .await?;

        let mut author_ids: Vec<i32> = notices.iter().map(|n| n.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let names = UserRepository::new(self.db)
            .get_display_names(&author_ids)
            .await?;

        Ok(PaginatedNotices {
            notices,
            names,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a notice. Unpublished notices are only visible to admins.
    ///
    /// # Arguments
    /// - `viewer` - The signed-in user, if any
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Missing, deleted, or unpublished for a non-admin
    pub async fn get(&self, id: i32, viewer: Option<&User>) -> Result<NoticeDetail, AppError> {
        let notice = NoticeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|n| n.is_published || viewer.is_some_and(User::is_admin))
            .ok_or_else(not_found)?;

        self.detail(notice).await
    }

    /// Creates an unpublished notice.
    pub async fn create(
        &self,
        author: &User,
        params: CreateNoticeParams,
    ) -> Result<NoticeDetail, AppError> {
        require_length("Title", &params.title, 1, MAX_TITLE_LENGTH)?;
        require_length("Content", &params.content, 1, MAX_CONTENT_LENGTH)?;
        require_range("Priority", params.priority, MIN_PRIORITY, MAX_PRIORITY)?;

        let notice = NoticeRepository::new(self.db)
            .create(author.id, params)
            .await?;

        tracing::info!("User {} created notice {}", author.id, notice.id);

        self.detail(notice).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateNoticeParams,
    ) -> Result<NoticeDetail, AppError> {
        if let Some(title) = &params.title {
            require_length("Title", title, 1, MAX_TITLE_LENGTH)?;
        }
        if let Some(content) = &params.content {
            require_length("Content", content, 1, MAX_CONTENT_LENGTH)?;
        }
        if let Some(priority) = params.priority {
            require_range("Priority", priority, MIN_PRIORITY, MAX_PRIORITY)?;
        }

        let notice = NoticeRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)?;

        self.detail(notice).await
    }

    /// Publishes a notice.
    ///
    /// The first publish stamps `published_at` and notifies every user with role
    /// `USER` or above. Republishing keeps the original time and notifies nobody.
    pub async fn publish(&self, id: i32) -> Result<NoticeDetail, AppError> {
        let txn = self.db.begin().await?;

        let repo = NoticeRepository::new(&txn);
        let first_publish = repo
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?
            .published_at
            .is_none();

        let notice = repo
            .set_published(id, true, Utc::now())
            .await?
            .ok_or_else(not_found)?;

        if first_publish {
            let recipients = UserRepository::new(&txn)
                .get_ids_with_min_role(Role::User)
                .await?;
            let delivered = NotificationService::new(&txn)
                .dispatch(DispatchNotificationParams {
                    category: NotificationCategory::Notice,
                    title: "New notice".to_string(),
                    body: notice.title.clone(),
                    link: Some(format!("/notices/{}", notice.id)),
                    recipients,
                })
                .await?;

            tracing::info!("Notice {} published to {} user(s)", notice.id, delivered);
        }

        txn.commit().await?;

        self.detail(notice).await
    }

    pub async fn unpublish(&self, id: i32) -> Result<NoticeDetail, AppError> {
        let notice = NoticeRepository::new(self.db)
            .set_published(id, false, Utc::now())
            .await?
            .ok_or_else(not_found)?;

        self.detail(notice).await
    }

    pub async fn set_pinned(&self, id: i32, pinned: bool) -> Result<NoticeDetail, AppError> {
        let notice = NoticeRepository::new(self.db)
            .set_pinned(id, pinned)
            .await?
            .ok_or_else(not_found)?;

        self.detail(notice).await
    }

    /// Soft-deletes a notice.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NoticeRepository::new(self.db)
            .soft_delete(id, Utc::now())
            .await?
        {
            return Err(not_found());
        }

        Ok(())
    }

    async fn detail(&self, notice: Notice) -> Result<NoticeDetail, AppError> {
        let names = UserRepository::new(self.db)
            .get_display_names(&[notice.author_id])
            .await?;

        Ok(NoticeDetail { notice, names })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Notice not found".to_string())
}

#[cfg(test)]
mod test;
