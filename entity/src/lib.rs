//! SeaORM entity definitions for every table in the community database.

pub mod prelude;

pub mod board;
pub mod channel;
pub mod comment;
pub mod game;
pub mod game_participant;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod notification_receipt;
pub mod notification_setting;
pub mod post;
pub mod user;
pub mod user_profile;
pub mod waiting_participant;
