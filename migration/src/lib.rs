pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_user_profile_table;
mod m20260301_000003_create_game_table;
mod m20260301_000004_create_game_post_table;
mod m20260301_000005_create_game_participant_table;
mod m20260301_000006_create_waiting_participant_table;
mod m20260305_000007_create_notice_table;
mod m20260305_000008_create_notification_table;
mod m20260305_000009_create_notification_receipt_table;
mod m20260305_000010_create_notification_setting_table;
mod m20260310_000011_create_channel_table;
mod m20260310_000012_create_board_table;
mod m20260310_000013_create_post_table;
mod m20260310_000014_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_user_profile_table::Migration),
            Box::new(m20260301_000003_create_game_table::Migration),
            Box::new(m20260301_000004_create_game_post_table::Migration),
            Box::new(m20260301_000005_create_game_participant_table::Migration),
            Box::new(m20260301_000006_create_waiting_participant_table::Migration),
            Box::new(m20260305_000007_create_notice_table::Migration),
            Box::new(m20260305_000008_create_notification_table::Migration),
            Box::new(m20260305_000009_create_notification_receipt_table::Migration),
            Box::new(m20260305_000010_create_notification_setting_table::Migration),
            Box::new(m20260310_000011_create_channel_table::Migration),
            Box::new(m20260310_000012_create_board_table::Migration),
            Box::new(m20260310_000013_create_post_table::Migration),
            Box::new(m20260310_000014_create_comment_table::Migration),
        ]
    }
}
