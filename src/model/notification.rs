use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationCategory {
    GamePost,
    Notice,
    Comment,
    System,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::GamePost => "GAME_POST",
            NotificationCategory::Notice => "NOTICE",
            NotificationCategory::Comment => "COMMENT",
            NotificationCategory::System => "SYSTEM",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GAME_POST" => Some(NotificationCategory::GamePost),
            "NOTICE" => Some(NotificationCategory::Notice),
            "COMMENT" => Some(NotificationCategory::Comment),
            "SYSTEM" => Some(NotificationCategory::System),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NotificationDto {
    pub receipt_id: i32,
    pub category: NotificationCategory,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub silent: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Do-not-disturb bounds are `HH:MM` in UTC.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NotificationSettingsDto {
    pub game_post_enabled: bool,
    pub notice_enabled: bool,
    pub comment_enabled: bool,
    pub dnd_enabled: bool,
    pub dnd_start: String,
    pub dnd_end: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct UpdateNotificationSettingsDto {
    pub game_post_enabled: Option<bool>,
    pub notice_enabled: Option<bool>,
    pub comment_enabled: Option<bool>,
    pub dnd_enabled: Option<bool>,
    pub dnd_start: Option<String>,
    pub dnd_end: Option<String>,
}
