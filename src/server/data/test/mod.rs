mod game;
mod notice;
mod profile;
mod user;
