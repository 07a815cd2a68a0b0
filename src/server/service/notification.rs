//! Notification delivery and inbox management.
//!
//! `NotificationService` is generic over the connection so that other services can
//! dispatch from inside their own transaction; a notification is then only stored if the
//! change that caused it commits.

use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::notification::{
        setting::NotificationSettingRepository, NotificationRepository, ReceiptTarget,
    },
    error::AppError,
    model::notification::{
        DispatchNotificationParams, NotificationSettings, PaginatedNotifications,
        UpdateNotificationSettingsParams,
    },
};

pub struct NotificationService<'a, C: ConnectionTrait> {
    pub db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn dispatch(&self, params: DispatchNotificationParams) -> Result<usize, AppError> {
        self.dispatch_at(params, Utc::now()).await
    }

    /// Delivers a notification to its recipients as of `now`.
    ///
    /// Duplicate recipients collapse into one receipt. Recipients who turned the category
    /// off get nothing; recipients inside their do-not-disturb window get a silent receipt.
    /// Nothing is stored when no recipient remains.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of receipts created
    pub async fn dispatch_at(
        &self,
        params: DispatchNotificationParams,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let mut recipients = params.recipients.clone();
        recipients.sort_unstable();
        recipients.dedup();

        let settings = NotificationSettingRepository::new(self.db)
            .get_many(&recipients)
            .await?;

        let targets: Vec<ReceiptTarget> = recipients
            .iter()
            .filter_map(|&user_id| {
                let settings = settings
                    .get(&user_id)
                    .cloned()
                    .unwrap_or_else(|| NotificationSettings::defaults_for(user_id));

                settings
                    .allows(params.category)
                    .then(|| ReceiptTarget {
                        user_id,
                        silent: settings.is_quiet_at(now),
                    })
            })
            .collect();

        if targets.is_empty() {
            tracing::debug!(
                "Skipping {} notification '{}': no recipients left",
                params.category.as_str(),
                params.title
            );
            return Ok(0);
        }

        NotificationRepository::new(self.db)
            .create_with_receipts(&params, &targets, now)
            .await?;

        Ok(targets.len())
    }

    /// Lists the caller's notifications, newest first, with their unread count.
    pub async fn list_mine(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (notifications, total, total_pages) = notification_repo
            .get_for_user_paginated(user_id, unread_only, page, per_page)
            .await?;
        let unread = notification_repo.count_unread(user_id).await?;

        Ok(PaginatedNotifications {
            notifications,
            unread,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Marks one of the caller's receipts read. Repeating it keeps the first read time.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The receipt does not exist or belongs to someone else
    pub async fn mark_read(&self, user_id: i32, receipt_id: i32) -> Result<(), AppError> {
        self.require_own_receipt(user_id, receipt_id).await?;

        NotificationRepository::new(self.db)
            .mark_read(receipt_id, Utc::now())
            .await
    }

    /// # Returns
    /// - `Ok(u64)` - Number of receipts that were unread
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(user_id, Utc::now())
            .await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - The receipt does not exist or belongs to someone else
    pub async fn delete(&self, user_id: i32, receipt_id: i32) -> Result<(), AppError> {
        self.require_own_receipt(user_id, receipt_id).await?;

        NotificationRepository::new(self.db)
            .delete_receipt(receipt_id)
            .await
    }

    pub async fn get_settings(&self, user_id: i32) -> Result<NotificationSettings, AppError> {
        NotificationSettingRepository::new(self.db).get(user_id).await
    }

    pub async fn update_settings(
        &self,
        user_id: i32,
        params: UpdateNotificationSettingsParams,
    ) -> Result<NotificationSettings, AppError> {
        let setting_repo = NotificationSettingRepository::new(self.db);

        let mut settings = setting_repo.get(user_id).await?;
        settings.apply(params);
        setting_repo.save(&settings).await?;

        Ok(settings)
    }

    async fn require_own_receipt(&self, user_id: i32, receipt_id: i32) -> Result<(), AppError> {
        let receipt = NotificationRepository::new(self.db)
            .find_receipt(receipt_id)
            .await?;

        match receipt {
            Some(receipt) if receipt.user_id == user_id => Ok(()),
            _ => Err(AppError::NotFound("Notification not found".to_string())),
        }
    }
}

#[cfg(test)]
mod test;
