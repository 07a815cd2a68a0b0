//! Notification domain models and the delivery rules.
//!
//! A notification is stored once and delivered to each recipient through a receipt.
//! Recipients who disabled the category get no receipt; recipients inside their
//! do-not-disturb window get a silent one.

use chrono::{DateTime, Timelike, Utc};

use crate::{
    model::notification::{
        NotificationCategory, NotificationDto, NotificationSettingsDto,
        PaginatedNotificationsDto, UpdateNotificationSettingsDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{format_minute_of_day, parse_minute_of_day},
    },
};

pub const DEFAULT_DND_START_MINUTE: i32 = 23 * 60;
pub const DEFAULT_DND_END_MINUTE: i32 = 7 * 60;

/// Whether `minute` falls in `[start, end)`, wrapping past midnight when `start > end`.
///
/// An equal start and end is an empty window.
pub fn minute_in_window(minute: i32, start: i32, end: i32) -> bool {
    if start < end {
        minute >= start && minute < end
    } else if start > end {
        minute >= start || minute < end
    } else {
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSettings {
    pub user_id: i32,
    pub game_post_enabled: bool,
    pub notice_enabled: bool,
    pub comment_enabled: bool,
    pub dnd_enabled: bool,
    /// Minutes since midnight, UTC.
    pub dnd_start_minute: i32,
    pub dnd_end_minute: i32,
}

impl NotificationSettings {
    /// Settings used for users that never saved any.
    pub fn defaults_for(user_id: i32) -> Self {
        Self {
            user_id,
            game_post_enabled: true,
            notice_enabled: true,
            comment_enabled: true,
            dnd_enabled: false,
            dnd_start_minute: DEFAULT_DND_START_MINUTE,
            dnd_end_minute: DEFAULT_DND_END_MINUTE,
        }
    }

    pub fn from_entity(entity: entity::notification_setting::Model) -> Self {
        Self {
            user_id: entity.user_id,
            game_post_enabled: entity.game_post_enabled,
            notice_enabled: entity.notice_enabled,
            comment_enabled: entity.comment_enabled,
            dnd_enabled: entity.dnd_enabled,
            dnd_start_minute: entity.dnd_start_minute,
            dnd_end_minute: entity.dnd_end_minute,
        }
    }

    pub fn into_dto(self) -> NotificationSettingsDto {
        NotificationSettingsDto {
            game_post_enabled: self.game_post_enabled,
            notice_enabled: self.notice_enabled,
            comment_enabled: self.comment_enabled,
            dnd_enabled: self.dnd_enabled,
            dnd_start: format_minute_of_day(self.dnd_start_minute),
            dnd_end: format_minute_of_day(self.dnd_end_minute),
        }
    }

    /// `SYSTEM` notifications ignore the category toggles.
    pub fn allows(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::GamePost => self.game_post_enabled,
            NotificationCategory::Notice => self.notice_enabled,
            NotificationCategory::Comment => self.comment_enabled,
            NotificationCategory::System => true,
        }
    }

    pub fn is_quiet_at(&self, now: DateTime<Utc>) -> bool {
        let minute = (now.hour() * 60 + now.minute()) as i32;
        self.dnd_enabled && minute_in_window(minute, self.dnd_start_minute, self.dnd_end_minute)
    }

    pub fn apply(&mut self, params: UpdateNotificationSettingsParams) {
        if let Some(enabled) = params.game_post_enabled {
            self.game_post_enabled = enabled;
        }
        if let Some(enabled) = params.notice_enabled {
            self.notice_enabled = enabled;
        }
        if let Some(enabled) = params.comment_enabled {
            self.comment_enabled = enabled;
        }
        if let Some(enabled) = params.dnd_enabled {
            self.dnd_enabled = enabled;
        }
        if let Some(minute) = params.dnd_start_minute {
            self.dnd_start_minute = minute;
        }
        if let Some(minute) = params.dnd_end_minute {
            self.dnd_end_minute = minute;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateNotificationSettingsParams {
    pub game_post_enabled: Option<bool>,
    pub notice_enabled: Option<bool>,
    pub comment_enabled: Option<bool>,
    pub dnd_enabled: Option<bool>,
    pub dnd_start_minute: Option<i32>,
    pub dnd_end_minute: Option<i32>,
}

impl UpdateNotificationSettingsParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A do-not-disturb bound is not `HH:MM`
    pub fn from_dto(dto: UpdateNotificationSettingsDto) -> Result<Self, AppError> {
        Ok(Self {
            game_post_enabled: dto.game_post_enabled,
            notice_enabled: dto.notice_enabled,
            comment_enabled: dto.comment_enabled,
            dnd_enabled: dto.dnd_enabled,
            dnd_start_minute: dto.dnd_start.as_deref().map(parse_minute_of_day).transpose()?,
            dnd_end_minute: dto.dnd_end.as_deref().map(parse_minute_of_day).transpose()?,
        })
    }
}

/// A delivered notification as seen by one recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub receipt_id: i32,
    pub user_id: i32,
    pub category: NotificationCategory,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub silent: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(
        receipt: entity::notification_receipt::Model,
        notification: entity::notification::Model,
    ) -> Result<Self, AppError> {
        let category = NotificationCategory::from_name(&notification.category).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "notification.category",
                value: notification.category.clone(),
            }
        })?;

        Ok(Self {
            receipt_id: receipt.id,
            user_id: receipt.user_id,
            category,
            title: notification.title,
            body: notification.body,
            link: notification.link,
            silent: receipt.silent,
            read_at: receipt.read_at,
            created_at: notification.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            receipt_id: self.receipt_id,
            category: self.category,
            title: self.title,
            body: self.body,
            link: self.link,
            silent: self.silent,
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect(),
            unread: self.unread,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A notification to fan out to a set of users.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchNotificationParams {
    pub category: NotificationCategory,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    /// Duplicates are collapsed.
    pub recipients: Vec<i32>,
}
