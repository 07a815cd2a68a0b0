use chrono::{DateTime, Utc};

use crate::{
    model::notice::{CreateNoticeDto, NoticeDto, PaginatedNoticesDto, UpdateNoticeDto},
    server::{model::user::DisplayNames, util::markdown::render_markdown},
};

pub const MIN_PRIORITY: i32 = 0;
pub const MAX_PRIORITY: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    /// Markdown source.
    pub content: String,
    pub is_published: bool,
    pub is_pinned: bool,
    pub priority: i32,
    /// Set on the first publish and kept through unpublish/republish.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notice {
    pub fn from_entity(entity: entity::notice::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            content: entity.content,
            is_published: entity.is_published,
            is_pinned: entity.is_pinned,
            priority: entity.priority,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self, names: &DisplayNames) -> NoticeDto {
        NoticeDto {
            id: self.id,
            author_id: self.author_id,
            author_name: names.get(self.author_id),
            content_html: render_markdown(&self.content),
            title: self.title,
            content: self.content,
            is_published: self.is_published,
            is_pinned: self.is_pinned,
            priority: self.priority,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A notice with its author's display name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeDetail {
    pub notice: Notice,
    pub names: DisplayNames,
}

impl NoticeDetail {
    pub fn into_dto(self) -> NoticeDto {
        self.notice.into_dto(&self.names)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotices {
    pub notices: Vec<Notice>,
    pub names: DisplayNames,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotices {
    pub fn into_dto(self) -> PaginatedNoticesDto {
        let names = self.names;

        PaginatedNoticesDto {
            notices: self.notices.into_iter().map(|n| n.into_dto(&names)).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNoticeParams {
    pub title: String,
    pub content: String,
    pub priority: i32,
    pub is_pinned: bool,
}

impl CreateNoticeParams {
    pub fn from_dto(dto: CreateNoticeDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            priority: dto.priority,
            is_pinned: dto.is_pinned,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateNoticeParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<i32>,
}

impl UpdateNoticeParams {
    pub fn from_dto(dto: UpdateNoticeDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            content: dto.content,
            priority: dto.priority,
        }
    }
}
