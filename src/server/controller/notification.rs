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
        notification::{
            NotificationSettingsDto, PaginatedNotificationsDto, UpdateNotificationSettingsDto,
        },
        user::Role,
    },
    server::{
        controller::param::NotificationListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::UpdateNotificationSettingsParams,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications, newest first.
///
/// The response also carries the caller's total unread count, independent of the
/// `unread_only` filter.
///
/// # Access Control
/// - Any signed-in user
///
/// # Arguments
/// - `params` - `unread_only` filter plus pagination
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unread_only" = Option<bool>, Query, description = "Only unread notifications (default: false)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NotificationListParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list_mine(user.id, params.unread_only, params.page(), params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark one notification read. Marking it again keeps the first read time.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/notifications/{receipt_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("receipt_id" = i32, Path, description = "Notification receipt ID")
    ),
    responses(
        (status = 204, description = "Marked read"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(receipt_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    NotificationService::new(&state.db)
        .mark_read(user.id, receipt_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark every unread notification of the caller read.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "All notifications marked read"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let marked = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    tracing::debug!("User {} marked {} notification(s) read", user.id, marked);

    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's notifications.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    delete,
    path = "/api/notifications/{receipt_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("receipt_id" = i32, Path, description = "Notification receipt ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(receipt_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    NotificationService::new(&state.db)
        .delete(user.id, receipt_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the caller's notification settings, created with defaults on first read.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/api/notifications/settings",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The caller's settings", body = NotificationSettingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let settings = NotificationService::new(&state.db)
        .get_settings(user.id)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update the caller's notification settings.
///
/// Do-not-disturb bounds are `HH:MM` in UTC; a window whose start is after its end
/// wraps midnight.
///
/// # Access Control
/// - `USER` and above
///
/// # Returns
/// - `200 OK` - The updated settings
/// - `400 Bad Request` - A bound is not `HH:MM`
#[utoipa::path(
    put,
    path = "/api/notifications/settings",
    tag = NOTIFICATION_TAG,
    request_body = UpdateNotificationSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = NotificationSettingsDto),
        (status = 400, description = "Invalid do-not-disturb time", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateNotificationSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let params = UpdateNotificationSettingsParams::from_dto(payload)?;
    let settings = NotificationService::new(&state.db)
        .update_settings(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
