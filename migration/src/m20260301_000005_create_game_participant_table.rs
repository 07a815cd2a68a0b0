use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000004_create_game_post_table::GamePost,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(GameParticipant::Id))
                    .col(integer(GameParticipant::GamePostId))
                    .col(integer_null(GameParticipant::UserId))
                    .col(string_null(GameParticipant::GuestName))
                    .col(string(GameParticipant::ParticipantType))
                    .col(boolean(GameParticipant::IsLeader).default(false))
                    .col(
                        timestamp(GameParticipant::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participant_game_post_id")
                            .from(GameParticipant::Table, GameParticipant::GamePostId)
                            .to(GamePost::Table, GamePost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participant_user_id")
                            .from(GameParticipant::Table, GameParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Guests carry no user id; SQLite treats NULLs as distinct here.
        manager
            .create_index(
                Index::create()
                    .name("idx_game_participant_post_user")
                    .table(GameParticipant::Table)
                    .col(GameParticipant::GamePostId)
                    .col(GameParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameParticipant {
    Table,
    Id,
    GamePostId,
    UserId,
    GuestName,
    ParticipantType,
    IsLeader,
    JoinedAt,
}
