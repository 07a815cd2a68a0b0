use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::CsrfSession,
};
use test_utils::context::TestContext;

mod csrf;
