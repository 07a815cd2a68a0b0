use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000003_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GamePost::Table)
                    .if_not_exists()
                    .col(pk_auto(GamePost::Id))
                    .col(integer(GamePost::GameId))
                    .col(integer(GamePost::AuthorId))
                    .col(string(GamePost::Title))
                    .col(text(GamePost::Description))
                    .col(integer(GamePost::MaxParticipants))
                    .col(string(GamePost::Status).default("OPEN"))
                    .col(timestamp(GamePost::StartTime))
                    .col(
                        timestamp(GamePost::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(GamePost::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_post_game_id")
                            .from(GamePost::Table, GamePost::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_post_author_id")
                            .from(GamePost::Table, GamePost::AuthorId)
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
                    .name("idx_game_post_status_start_time")
                    .table(GamePost::Table)
                    .col(GamePost::Status)
                    .col(GamePost::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GamePost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GamePost {
    Table,
    Id,
    GameId,
    AuthorId,
    Title,
    Description,
    MaxParticipants,
    Status,
    StartTime,
    CreatedAt,
    UpdatedAt,
}
