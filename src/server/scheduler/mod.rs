//! Cron jobs running next to the HTTP server.

pub mod game_post_status;
