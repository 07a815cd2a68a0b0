use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::board::{CreateBoardParams, CreateChannelParams},
        service::board::BoardService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_board;
mod list_channels;

fn channel_params(slug: &str) -> CreateChannelParams {
    CreateChannelParams {
        name: "Community".to_string(),
        slug: slug.to_string(),
        description: None,
    }
}

fn board_params(channel_id: i32, slug: &str) -> CreateBoardParams {
    CreateBoardParams {
        channel_id,
        name: "Free talk".to_string(),
        slug: slug.to_string(),
        write_role: Role::User,
    }
}
