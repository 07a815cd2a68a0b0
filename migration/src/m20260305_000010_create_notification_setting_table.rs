use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationSetting::Table)
                    .if_not_exists()
                    .col(integer(NotificationSetting::UserId).primary_key())
                    .col(boolean(NotificationSetting::GamePostEnabled).default(true))
                    .col(boolean(NotificationSetting::NoticeEnabled).default(true))
                    .col(boolean(NotificationSetting::CommentEnabled).default(true))
                    .col(boolean(NotificationSetting::DndEnabled).default(false))
                    .col(integer(NotificationSetting::DndStartMinute).default(23 * 60))
                    .col(integer(NotificationSetting::DndEndMinute).default(7 * 60))
                    .col(
                        timestamp(NotificationSetting::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_setting_user_id")
                            .from(NotificationSetting::Table, NotificationSetting::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationSetting {
    Table,
    UserId,
    GamePostEnabled,
    NoticeEnabled,
    CommentEnabled,
    DndEnabled,
    DndStartMinute,
    DndEndMinute,
    UpdatedAt,
}
