use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260305_000008_create_notification_table::Notification,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationReceipt::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationReceipt::Id))
                    .col(integer(NotificationReceipt::NotificationId))
                    .col(integer(NotificationReceipt::UserId))
                    .col(boolean(NotificationReceipt::Silent).default(false))
                    .col(timestamp_null(NotificationReceipt::ReadAt))
                    .col(
                        timestamp(NotificationReceipt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_receipt_notification_id")
                            .from(
                                NotificationReceipt::Table,
                                NotificationReceipt::NotificationId,
                            )
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_receipt_user_id")
                            .from(NotificationReceipt::Table, NotificationReceipt::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_receipt_notification_user")
                    .table(NotificationReceipt::Table)
                    .col(NotificationReceipt::NotificationId)
                    .col(NotificationReceipt::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationReceipt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationReceipt {
    Table,
    Id,
    NotificationId,
    UserId,
    Silent,
    ReadAt,
    CreatedAt,
}
