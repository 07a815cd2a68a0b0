use crate::server::{
    error::AppError, model::profile::UpdateProfileParams, service::profile::ProfileService,
};
use test_utils::{builder::TestBuilder, factory};

mod update;
