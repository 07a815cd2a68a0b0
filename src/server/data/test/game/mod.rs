use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParams, UpdateGameParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod name_taken;
mod update;
