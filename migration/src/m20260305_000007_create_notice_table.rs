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
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(integer(Notice::AuthorId))
                    .col(string(Notice::Title))
                    .col(text(Notice::Content))
                    .col(boolean(Notice::IsPublished).default(false))
                    .col(boolean(Notice::IsPinned).default(false))
                    .col(integer(Notice::Priority).default(0))
                    .col(timestamp_null(Notice::PublishedAt))
                    .col(
                        timestamp(Notice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Notice::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Notice::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notice_author_id")
                            .from(Notice::Table, Notice::AuthorId)
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
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    IsPublished,
    IsPinned,
    Priority,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
