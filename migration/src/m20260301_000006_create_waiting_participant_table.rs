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
                    .table(WaitingParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(WaitingParticipant::Id))
                    .col(integer(WaitingParticipant::GamePostId))
                    .col(integer(WaitingParticipant::UserId))
                    .col(string(WaitingParticipant::Status))
                    .col(timestamp_null(WaitingParticipant::AvailableTime))
                    .col(string_null(WaitingParticipant::Message))
                    .col(
                        timestamp(WaitingParticipant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiting_participant_game_post_id")
                            .from(WaitingParticipant::Table, WaitingParticipant::GamePostId)
                            .to(GamePost::Table, GamePost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiting_participant_user_id")
                            .from(WaitingParticipant::Table, WaitingParticipant::UserId)
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
                    .name("idx_waiting_participant_post_user")
                    .table(WaitingParticipant::Table)
                    .col(WaitingParticipant::GamePostId)
                    .col(WaitingParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaitingParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaitingParticipant {
    Table,
    Id,
    GamePostId,
    UserId,
    Status,
    AvailableTime,
    Message,
    CreatedAt,
}
