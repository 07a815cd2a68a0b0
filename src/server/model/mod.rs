//! Domain models and operation parameters used between the service and data layers.

pub mod board;
pub mod game;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod user;
