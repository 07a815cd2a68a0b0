use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    model::notification::NotificationCategory,
    server::{
        data::notification::{setting::NotificationSettingRepository, NotificationRepository},
        error::AppError,
        model::notification::{
            DispatchNotificationParams, NotificationSettings, UpdateNotificationSettingsParams,
        },
        service::notification::NotificationService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod dispatch;
mod inbox;

fn params(category: NotificationCategory, recipients: Vec<i32>) -> DispatchNotificationParams {
    DispatchNotificationParams {
        category,
        title: "Slot opened".to_string(),
        body: "You were moved off the waiting list".to_string(),
        link: Some("/game-posts/1".to_string()),
        recipients,
    }
}
