use crate::{
    model::user::Role,
    server::{
        data::profile::ProfileRepository, error::AppError, model::user::UpsertUserParam,
        service::user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};


fn login(oauth_id: &str, name: &str) -> UpsertUserParam {
    UpsertUserParam {
        oauth_id: oauth_id.to_string(),
        name: name.to_string(),
        email: None,
    }
}
