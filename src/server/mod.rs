//! HTTP API server for the community: boards, game recruitment, notices and notifications.
//!
//! Axum serves the routes and SeaORM talks to SQLite. Code is layered so that only
//! controllers see DTOs and only repositories see entity models:
//!
//! - `controller/` - Request handlers: access checks, DTO conversion, one service call
//! - `service/` - Business rules and transactions spanning several repositories
//! - `data/` - Repositories converting entity models to domain models
//! - `model/` - Domain models and operation parameters
//! - `error/` - `AppError` and its mapping to JSON error responses
//! - `middleware/` - Typed session access and the `AuthGuard`
//!
//! Around them sit `config` (environment), `state` (shared handles), `startup`
//! (database, sessions, OAuth client, bootstrap code), `router` (routes plus OpenAPI) and
//! `scheduler/` (the per-minute game post status job).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
