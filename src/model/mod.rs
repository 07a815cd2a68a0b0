//! Request and response types shared by every API endpoint.

pub mod api;
pub mod board;
pub mod game;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod user;
