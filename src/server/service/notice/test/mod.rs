use chrono::{Duration, Utc};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notice::{CreateNoticeParams, UpdateNoticeParams},
        user::User,
    },
    service::notice::NoticeService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, notice::NoticeFactory},
};

mod publish;
mod update;

fn user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}

fn params(title: &str) -> CreateNoticeParams {
    CreateNoticeParams {
        title: title.to_string(),
        content: "Server maintenance on **Friday**".to_string(),
        priority: 3,
        is_pinned: false,
    }
}
