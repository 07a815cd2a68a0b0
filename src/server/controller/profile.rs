use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpdateProfileDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::profile::UpdateProfileParams,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the signed-in user's profile.
///
/// # Access Control
/// - Any signed-in user, suspended accounts included
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = ProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = ProfileService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the signed-in user's profile.
///
/// Omitted fields stay unchanged. Nicknames are unique across users.
///
/// # Access Control
/// - `USER` and above
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - A field fails validation
/// - `409 Conflict` - Nickname already taken
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 409, description = "Nickname already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let profile = ProfileService::new(&state.db)
        .update(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get any user's public profile.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/profile",
    tag = PROFILE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's profile", body = ProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
