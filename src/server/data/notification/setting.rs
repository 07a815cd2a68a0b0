use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::{error::AppError, model::notification::NotificationSettings};

/// Repository for per-user notification settings.
///
/// A user's row is created from [`NotificationSettings::defaults_for`] on first read.
pub struct NotificationSettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationSettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the stored settings of a user, inserting the defaults when none exist.
    ///
    /// A concurrent first read that inserted first wins; its row is returned.
    pub async fn get(&self, user_id: i32) -> Result<NotificationSettings, AppError> {
        if let Some(stored) = entity::prelude::NotificationSetting::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            return Ok(NotificationSettings::from_entity(stored));
        }

        let defaults = NotificationSettings::defaults_for(user_id);
        entity::prelude::NotificationSetting::insert(active_model(&defaults))
            .on_conflict(
                OnConflict::column(entity::notification_setting::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let settings = entity::prelude::NotificationSetting::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(NotificationSettings::from_entity)
            .unwrap_or(defaults);

        Ok(settings)
    }

    /// Settings for several users, with defaults filled in for users without a row.
    pub async fn get_many(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, NotificationSettings>, AppError> {
        let mut settings: HashMap<i32, NotificationSettings> = user_ids
            .iter()
            .map(|&id| (id, NotificationSettings::defaults_for(id)))
            .collect();

        if user_ids.is_empty() {
            return Ok(settings);
        }

        let stored = entity::prelude::NotificationSetting::find()
            .filter(entity::notification_setting::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        for entity in stored {
            settings.insert(entity.user_id, NotificationSettings::from_entity(entity));
        }

        Ok(settings)
    }

    /// Inserts or replaces the stored settings of a user.
    pub async fn save(&self, settings: &NotificationSettings) -> Result<(), AppError> {
        use entity::notification_setting::Column;

        entity::prelude::NotificationSetting::insert(active_model(settings))
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::GamePostEnabled,
                        Column::NoticeEnabled,
                        Column::CommentEnabled,
                        Column::DndEnabled,
                        Column::DndStartMinute,
                        Column::DndEndMinute,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}

fn active_model(settings: &NotificationSettings) -> entity::notification_setting::ActiveModel {
    entity::notification_setting::ActiveModel {
        user_id: ActiveValue::Set(settings.user_id),
        game_post_enabled: ActiveValue::Set(settings.game_post_enabled),
        notice_enabled: ActiveValue::Set(settings.notice_enabled),
        comment_enabled: ActiveValue::Set(settings.comment_enabled),
        dnd_enabled: ActiveValue::Set(settings.dnd_enabled),
        dnd_start_minute: ActiveValue::Set(settings.dnd_start_minute),
        dnd_end_minute: ActiveValue::Set(settings.dnd_end_minute),
        updated_at: ActiveValue::Set(Utc::now()),
    }
}
