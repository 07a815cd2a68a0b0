use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for notices. Defaults to an unpinned draft with priority 0.
pub struct NoticeFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    published_at: Option<DateTime<Utc>>,
    is_pinned: bool,
    priority: i32,
}

impl<'a> NoticeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            title: format!("Notice {}", next_id()),
            published_at: None,
            is_pinned: false,
            priority: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Marks the notice as published at the given time.
    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub async fn build(self) -> Result<entity::notice::Model, DbErr> {
        let now = Utc::now();
        entity::notice::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set("**Hello**".to_string()),
            is_published: ActiveValue::Set(self.published_at.is_some()),
            is_pinned: ActiveValue::Set(self.is_pinned),
            priority: ActiveValue::Set(self.priority),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpublished draft notice.
pub async fn create_notice(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::notice::Model, DbErr> {
    NoticeFactory::new(db, author_id).build().await
}
