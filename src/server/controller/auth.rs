use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::param::{CallbackParam, LoginParam},
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, BootstrapSession, CsrfSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Start the OAuth login flow.
///
/// Redirects to the provider's authorization page. A fresh CSRF state token is stored
/// in the session and checked again in the callback. When a valid bootstrap `code` is
/// given, the user who completes this login becomes `SUPER_ADMIN`.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state with the OAuth client and bootstrap code service
/// - `session` - Session that stores the CSRF token and bootstrap flag
/// - `params` - Optional bootstrap code
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the provider
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "One-time bootstrap code")
    ),
    responses(
        (status = 307, description = "Redirect to the OAuth provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParam>,
) -> Result<impl IntoResponse, AppError> {
    let bootstrap = match params.code {
        Some(code) => state.bootstrap_code_service.validate_and_consume(&code).await,
        None => false,
    };
    BootstrapSession::new(&session).set_flag(bootstrap).await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    );
    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish the OAuth login flow.
///
/// Validates the CSRF state, exchanges the authorization code, records the login and
/// stores the user in the session before redirecting back to the application.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `307 Temporary Redirect` - Signed in, redirect to the application
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Token exchange or userinfo request failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the application"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParam>,
) -> Result<impl IntoResponse, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let bootstrap = BootstrapSession::new(&session).take_flag().await?;

    let user = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
    )
    .callback(params.code, bootstrap)
    .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} signed in", user.id);

    Ok(Redirect::temporary(&state.app_url))
}

/// Sign out.
///
/// Clears the whole session.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the application
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the application")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&state.app_url)
}

/// Get the signed-in user.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `404 Not Found` - Nobody is signed in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in user", body = UserDto),
        (status = 404, description = "Nobody is signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .current_user()
        .await?
        .ok_or_else(|| AppError::NotFound("Not signed in".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
