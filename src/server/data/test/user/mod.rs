use crate::{
    model::user::Role,
    server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
mod get_display_names;
mod get_ids_with_min_role;
mod role_exists;
mod set_role;
mod upsert;
