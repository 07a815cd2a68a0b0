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
        notice::{CreateNoticeDto, NoticeDto, PaginatedNoticesDto, SetPinnedDto, UpdateNoticeDto},
        user::Role,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notice::{CreateNoticeParams, UpdateNoticeParams},
        service::notice::NoticeService,
        state::AppState,
    },
};

/// Tag for grouping notice endpoints in OpenAPI documentation
pub static NOTICE_TAG: &str = "notice";

/// List published notices.
///
/// Pinned notices come first, then higher priority, then the most recently published.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = NOTICE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Published notices", body = PaginatedNoticesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notices(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let notices = NoticeService::new(&state.db)
        .list_published(params.page(), params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(notices.into_dto())))
}

/// Get a notice.
///
/// Drafts are only visible to admins; everyone else gets a 404.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/notices/{notice_id}",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "The notice", body = NoticeDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notice(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let notice = NoticeService::new(&state.db)
        .get(notice_id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(notice.into_dto())))
}

/// List every notice, drafts included.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    get,
    path = "/api/admin/notices",
    tag = NOTICE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "All notices", body = PaginatedNoticesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_notices(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notices = NoticeService::new(&state.db)
        .list_all(params.page(), params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(notices.into_dto())))
}

/// Create a draft notice.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Returns
/// - `201 Created` - The new, unpublished notice
/// - `400 Bad Request` - Invalid title, content or priority
#[utoipa::path(
    post,
    path = "/api/admin/notices",
    tag = NOTICE_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice created", body = NoticeDto),
        (status = 400, description = "Invalid notice data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notice = NoticeService::new(&state.db)
        .create(&user, CreateNoticeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notice.into_dto())))
}

/// Edit a notice.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    put,
    path = "/api/admin/notices/{notice_id}",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    request_body = UpdateNoticeDto,
    responses(
        (status = 200, description = "Notice updated", body = NoticeDto),
        (status = 400, description = "Invalid notice data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_notice(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
    Json(payload): Json<UpdateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notice = NoticeService::new(&state.db)
        .update(notice_id, UpdateNoticeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(notice.into_dto())))
}

/// Soft-delete a notice.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    delete,
    path = "/api/admin/notices/{notice_id}",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    responses(
        (status = 204, description = "Notice deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notice(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    NoticeService::new(&state.db).delete(notice_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a notice.
///
/// The first publish notifies every user with role `USER` or above.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/admin/notices/{notice_id}/publish",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "Notice published", body = NoticeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_notice(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notice = NoticeService::new(&state.db).publish(notice_id).await?;

    Ok((StatusCode::OK, Json(notice.into_dto())))
}

/// Take a notice back to draft.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/admin/notices/{notice_id}/unpublish",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "Notice unpublished", body = NoticeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unpublish_notice(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notice = NoticeService::new(&state.db).unpublish(notice_id).await?;

    Ok((StatusCode::OK, Json(notice.into_dto())))
}

/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    put,
    path = "/api/admin/notices/{notice_id}/pinned",
    tag = NOTICE_TAG,
    params(
        ("notice_id" = i32, Path, description = "Notice ID")
    ),
    request_body = SetPinnedDto,
    responses(
        (status = 200, description = "Pin state changed", body = NoticeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_notice_pinned(
    State(state): State<AppState>,
    session: Session,
    Path(notice_id): Path<i32>,
    Json(payload): Json<SetPinnedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let notice = NoticeService::new(&state.db)
        .set_pinned(notice_id, payload.pinned)
        .await?;

    Ok((StatusCode::OK, Json(notice.into_dto())))
}
