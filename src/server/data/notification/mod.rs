//! Notification and receipt repository.
//!
//! A `notification` row holds the content once; each recipient gets a
//! `notification_receipt` row that tracks silence and read state.

pub mod setting;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::notification::{DispatchNotificationParams, Notification},
};

/// A receipt to create: recipient and whether it is delivered silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptTarget {
    pub user_id: i32,
    pub silent: bool,
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a notification and one receipt per target.
    ///
    /// # Returns
    /// - `Ok(notification_id)` - ID of the stored notification
    pub async fn create_with_receipts(
        &self,
        params: &DispatchNotificationParams,
        targets: &[ReceiptTarget],
        now: DateTime<Utc>,
    ) -> Result<i32, AppError> {
        let notification = entity::notification::ActiveModel {
            category: ActiveValue::Set(params.category.as_str().to_string()),
            title: ActiveValue::Set(params.title.clone()),
            body: ActiveValue::Set(params.body.clone()),
            link: ActiveValue::Set(params.link.clone()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !targets.is_empty() {
            let receipts = targets.iter().map(|target| entity::notification_receipt::ActiveModel {
                notification_id: ActiveValue::Set(notification.id),
                user_id: ActiveValue::Set(target.user_id),
                silent: ActiveValue::Set(target.silent),
                read_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

            entity::prelude::NotificationReceipt::insert_many(receipts)
                .exec(self.db)
                .await?;
        }

        Ok(notification.id)
    }

    /// Gets a user's notifications, newest first.
    ///
    /// # Returns
    /// - `Ok((notifications, total, total_pages))` - Page of notifications for the user
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64, u64), AppError> {
        let mut query = entity::prelude::NotificationReceipt::find()
            .filter(entity::notification_receipt::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification_receipt::Column::ReadAt.is_null());
        }

        let paginator = query
            .order_by_desc(entity::notification_receipt::Column::CreatedAt)
            .order_by_desc(entity::notification_receipt::Column::Id)
            .find_also_related(entity::prelude::Notification)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let notifications = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(receipt, notification)| {
                let notification = notification.ok_or_else(|| {
                    InternalError::MissingRow(format!(
                        "notification for receipt {}",
                        receipt.id
                    ))
                })?;
                Notification::from_entity(receipt, notification)
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok((notifications, totals.number_of_items, totals.number_of_pages))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::NotificationReceipt::find()
            .filter(entity::notification_receipt::Column::UserId.eq(user_id))
            .filter(entity::notification_receipt::Column::ReadAt.is_null())
            .count(self.db)
            .await?;

        Ok(count)
    }

    pub async fn find_receipt(
        &self,
        receipt_id: i32,
    ) -> Result<Option<entity::notification_receipt::Model>, AppError> {
        let receipt = entity::prelude::NotificationReceipt::find_by_id(receipt_id)
            .one(self.db)
            .await?;

        Ok(receipt)
    }

    /// Marks a receipt read unless it already is; the first read time is kept.
    pub async fn mark_read(&self, receipt_id: i32, now: DateTime<Utc>) -> Result<(), AppError> {
        entity::prelude::NotificationReceipt::update_many()
            .col_expr(
                entity::notification_receipt::Column::ReadAt,
                Expr::value(now),
            )
            .filter(entity::notification_receipt::Column::Id.eq(receipt_id))
            .filter(entity::notification_receipt::Column::ReadAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks every unread receipt of a user as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of receipts changed
    pub async fn mark_all_read(&self, user_id: i32, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::NotificationReceipt::update_many()
            .col_expr(
                entity::notification_receipt::Column::ReadAt,
                Expr::value(now),
            )
            .filter(entity::notification_receipt::Column::UserId.eq(user_id))
            .filter(entity::notification_receipt::Column::ReadAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_receipt(&self, receipt_id: i32) -> Result<(), AppError> {
        entity::prelude::NotificationReceipt::delete_by_id(receipt_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
