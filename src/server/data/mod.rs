//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table (or a small group of tables) and convert
//! entity models to domain models at the boundary. Every repository borrows any
//! `ConnectionTrait`, so services can run several of them inside one transaction.

pub mod board;
pub mod game;
pub mod game_post;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod user;

#[cfg(test)]
mod test;
