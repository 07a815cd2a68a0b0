use chrono::{Duration, Utc};

use crate::{
    model::notification::NotificationCategory,
    server::{
        data::notification::{
            setting::NotificationSettingRepository, NotificationRepository, ReceiptTarget,
        },
        error::AppError,
        model::notification::{DispatchNotificationParams, NotificationSettings},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_with_receipts;
mod get_for_user_paginated;
mod setting;

fn params(recipients: Vec<i32>) -> DispatchNotificationParams {
    DispatchNotificationParams {
        category: NotificationCategory::System,
        title: "Welcome".to_string(),
        body: "Thanks for joining".to_string(),
        link: None,
        recipients,
    }
}
