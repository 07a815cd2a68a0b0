use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{comment::CommentService, post::PostService},
};
use test_utils::{builder::TestBuilder, factory};


fn user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}
