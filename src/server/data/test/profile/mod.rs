use crate::{
    model::user::Role,
    server::{
        data::profile::ProfileRepository, error::AppError, model::profile::UpdateProfileParams,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod nickname_taken;
mod update;
