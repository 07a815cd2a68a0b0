use chrono::Utc;

use crate::{
    model::user::Role,
    server::{
        data::board::{
            comment::CommentRepository, post::PostRepository, BoardRepository, ChannelRepository,
        },
        error::AppError,
        model::board::{CreateBoardParams, CreateChannelParams},
    },
};
use test_utils::{builder::TestBuilder, factory};
