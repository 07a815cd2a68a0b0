use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        board::{CreatePostParams, UpdatePostParams},
        user::User,
    },
    service::post::PostService,
};
use test_utils::{builder::TestBuilder, factory};


fn user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}

fn params(board_id: i32) -> CreatePostParams {
    CreatePostParams {
        board_id,
        author_id: 0,
        title: "Looking for a raid group".to_string(),
        content: "Weekends, EU evenings".to_string(),
    }
}
