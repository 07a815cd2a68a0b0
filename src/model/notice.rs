use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Rendered HTML with raw HTML escaped.
    pub content_html: String,
    pub is_published: bool,
    pub is_pinned: bool,
    pub priority: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateNoticeDto {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_pinned: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct UpdateNoticeDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SetPinnedDto {
    pub pinned: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedNoticesDto {
    pub notices: Vec<NoticeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
