use chrono::{Duration, Utc};

use crate::server::{
    data::notice::NoticeRepository,
    error::AppError,
    model::notice::{CreateNoticeParams, UpdateNoticeParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod set_published;
mod soft_delete;
mod update;
