//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and notification fan-out
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step changes in one database transaction

pub mod auth;
pub mod board;
pub mod bootstrap;
pub mod comment;
pub mod game;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod post;
pub mod profile;
pub mod user;
