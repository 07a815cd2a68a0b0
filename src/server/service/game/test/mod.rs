use crate::server::{
    error::AppError,
    model::game::{CreateGameParams, UpdateGameParams},
    service::game::GameService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

fn params(name: &str, max: i32) -> CreateGameParams {
    CreateGameParams {
        name: name.to_string(),
        image_url: None,
        default_max_participants: max,
    }
}
