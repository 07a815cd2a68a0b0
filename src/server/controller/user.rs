use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, Role, SetRoleDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Arguments
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated users
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Role below `ADMIN`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page(), params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Change a user's role.
///
/// Setting a user to `NONE` suspends them. Nobody can change their own role.
///
/// # Access Control
/// - `SUPER_ADMIN` only
///
/// # Returns
/// - `200 OK` - The user with the new role
/// - `400 Bad Request` - Tried to change own role
/// - `403 Forbidden` - Role below `SUPER_ADMIN`
/// - `404 Not Found` - No such user
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role changed", body = UserDto),
        (status = 400, description = "Tried to change own role", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::SuperAdmin)])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(actor.id, user_id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
