//! HTTP request handlers.
//!
//! Each handler checks access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts the request DTO into service params, calls a single service and converts the
//! result back into a response DTO. Every handler carries a `#[utoipa::path]` annotation
//! so the OpenAPI document stays in sync with the routes registered in
//! [`router`](crate::server::router).

pub mod auth;
pub mod board;
pub mod game;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod param;
pub mod profile;
pub mod user;

#[cfg(test)]
mod test;
