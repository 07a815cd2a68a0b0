//! Game post (recruitment) endpoints.
//!
//! Endpoints that change the roster or the waiting list answer with the refreshed
//! post, so the client never has to patch its copy.

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
        game_post::{
            AddGuestDto, CreateGamePostDto, GamePostDto, InviteDto, JoinResultDto,
            LeaveResultDto, PaginatedGamePostsDto, TransferLeaderDto, UpdateGamePostDto,
            WaitUntilDto,
        },
        user::Role,
    },
    server::{
        controller::param::GamePostListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game_post::{CreateGamePostParams, GamePostFilter, UpdateGamePostParams},
        service::game_post::GamePostService,
        state::AppState,
    },
};

/// Tag for grouping game post endpoints in OpenAPI documentation
pub static GAME_POST_TAG: &str = "game_post";

/// List game posts, earliest start first.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `params` - Optional game and status filters plus pagination
#[utoipa::path(
    get,
    path = "/api/game-posts",
    tag = GAME_POST_TAG,
    params(
        ("game_id" = Option<i32>, Query, description = "Only posts for this game"),
        ("status" = Option<String>, Query, description = "OPEN, FULL, IN_PROGRESS or COMPLETED"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated game posts", body = PaginatedGamePostsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_posts(
    State(state): State<AppState>,
    Query(params): Query<GamePostListParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = GamePostFilter {
        game_id: params.game_id,
        status: params.status,
        page: params.page(),
        per_page: params.per_page(),
    };
    let game_posts = GamePostService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(game_posts.into_dto())))
}

/// Get a game post with its participants and waiting list.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/game-posts/{game_post_id}",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "The game post", body = GamePostDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_post(
    State(state): State<AppState>,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game_post = GamePostService::new(&state.db).get(game_post_id).await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Create a game post. The author becomes its leader.
///
/// # Access Control
/// - `USER` and above
///
/// # Returns
/// - `201 Created` - The new game post
/// - `400 Bad Request` - Invalid fields or a start time in the past
/// - `404 Not Found` - Unknown game
#[utoipa::path(
    post,
    path = "/api/game-posts",
    tag = GAME_POST_TAG,
    request_body = CreateGamePostDto,
    responses(
        (status = 201, description = "Game post created", body = GamePostDto),
        (status = 400, description = "Invalid game post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGamePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let game_post = GamePostService::new(&state.db)
        .create(&user, CreateGamePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game_post.into_dto())))
}

/// Edit a recruiting game post.
///
/// Raising `max_participants` admits users from the waiting list.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
///
/// # Returns
/// - `200 OK` - The updated game post
/// - `400 Bad Request` - Invalid fields, or a capacity below the current roster
/// - `409 Conflict` - The post already started or finished
#[utoipa::path(
    put,
    path = "/api/game-posts/{game_post_id}",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    request_body = UpdateGamePostDto,
    responses(
        (status = 200, description = "Game post updated", body = GamePostDto),
        (status = 400, description = "Invalid game post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Game post is no longer recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
    Json(payload): Json<UpdateGamePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let game_post = GamePostService::new(&state.db)
        .update(&user, game_post_id, UpdateGamePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Delete a game post with its roster and waiting list.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    delete,
    path = "/api/game-posts/{game_post_id}",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 204, description = "Game post deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    GamePostService::new(&state.db)
        .delete(&user, game_post_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Start the game now. The waiting list is cleared.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/start",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "Game started", body = GamePostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Game already started or finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let game_post = GamePostService::new(&state.db)
        .start(&user, game_post_id)
        .await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Mark a running game as completed.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/complete",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "Game completed", body = GamePostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Game is not in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let game_post = GamePostService::new(&state.db)
        .complete(&user, game_post_id)
        .await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Join a game post.
///
/// Takes a free slot if there is one, otherwise queues the caller on the waiting
/// list. A pending invitation is consumed by joining.
///
/// # Access Control
/// - `USER` and above
///
/// # Returns
/// - `200 OK` - `JOINED`, or `WAITLISTED` with the 1-based waiting position
/// - `409 Conflict` - Already in the post, or the post is no longer recruiting
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/join",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "Joined or waitlisted", body = JoinResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Already in the post or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let outcome = GamePostService::new(&state.db)
        .join(&user, game_post_id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Queue on the waiting list from a later time on.
///
/// Time-waiting entries are never promoted automatically; the leader admits them.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/wait",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    request_body = WaitUntilDto,
    responses(
        (status = 201, description = "Queued", body = GamePostDto),
        (status = 400, description = "Time in the past or message too long", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Already in the post or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn wait_for_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
    Json(payload): Json<WaitUntilDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service
        .wait_until(&user, game_post_id, payload.available_time, payload.message)
        .await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::CREATED, Json(game_post.into_dto())))
}

/// Leave a game post or its waiting list.
///
/// When the leader leaves, leadership passes to the earliest-joined remaining member.
/// When no member remains, the post is deleted.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/leave",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "Left the post", body = LeaveResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Not in this game post", body = ErrorDto),
        (status = 409, description = "Game already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let outcome = GamePostService::new(&state.db)
        .leave(&user, game_post_id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Invite a user to the game post.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/invitations",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    request_body = InviteDto,
    responses(
        (status = 201, description = "User invited", body = GamePostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post or user not found", body = ErrorDto),
        (status = 409, description = "User already in the post or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_to_game_post(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
    Json(payload): Json<InviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service
        .invite(&user, game_post_id, payload.user_id)
        .await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::CREATED, Json(game_post.into_dto())))
}

/// Accept the caller's pending invitation.
///
/// # Access Control
/// - `USER` and above, holding an invitation
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/invitation/accept",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 200, description = "Invitation accepted", body = GamePostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No pending invitation", body = ErrorDto),
        (status = 409, description = "No free slot or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service.accept_invite(&user, game_post_id).await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Decline the caller's pending invitation.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/invitation/decline",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    responses(
        (status = 204, description = "Invitation declined"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "No pending invitation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    GamePostService::new(&state.db)
        .decline_invite(&user, game_post_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Admit an entry from the waiting list, whatever its kind.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/waiting/{waiting_id}/accept",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID"),
        ("waiting_id" = i32, Path, description = "Waiting list entry ID")
    ),
    responses(
        (status = 200, description = "Entry admitted", body = GamePostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post or entry not found", body = ErrorDto),
        (status = 409, description = "No free slot or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_waiting(
    State(state): State<AppState>,
    session: Session,
    Path((game_post_id, waiting_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service
        .accept_waiting(&user, game_post_id, waiting_id)
        .await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Add a guest (someone without an account) to the roster.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    post,
    path = "/api/game-posts/{game_post_id}/guests",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    request_body = AddGuestDto,
    responses(
        (status = 201, description = "Guest added", body = GamePostDto),
        (status = 400, description = "Invalid guest name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "No free slot or not recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_guest(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
    Json(payload): Json<AddGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service.add_guest(&user, game_post_id, payload.name).await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::CREATED, Json(game_post.into_dto())))
}

/// Remove a member or guest from the roster. The freed slot is refilled from the
/// waiting list.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
///
/// # Returns
/// - `200 OK` - The updated game post
/// - `400 Bad Request` - Tried to remove the leader
#[utoipa::path(
    delete,
    path = "/api/game-posts/{game_post_id}/participants/{participant_id}",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID"),
        ("participant_id" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant removed", body = GamePostDto),
        (status = 400, description = "The leader cannot be removed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post or participant not found", body = ErrorDto),
        (status = 409, description = "Game post is no longer recruiting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_participant(
    State(state): State<AppState>,
    session: Session,
    Path((game_post_id, participant_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service
        .remove_participant(&user, game_post_id, participant_id)
        .await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}

/// Hand leadership to another member.
///
/// # Access Control
/// - Leader of the post, or `ADMIN` and above
#[utoipa::path(
    put,
    path = "/api/game-posts/{game_post_id}/leader",
    tag = GAME_POST_TAG,
    params(
        ("game_post_id" = i32, Path, description = "Game post ID")
    ),
    request_body = TransferLeaderDto,
    responses(
        (status = 200, description = "Leadership transferred", body = GamePostDto),
        (status = 400, description = "Target is not a member", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the leader", body = ErrorDto),
        (status = 404, description = "Game post not found", body = ErrorDto),
        (status = 409, description = "Game post is completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_leader(
    State(state): State<AppState>,
    session: Session,
    Path(game_post_id): Path<i32>,
    Json(payload): Json<TransferLeaderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = GamePostService::new(&state.db);
    service
        .transfer_leader(&user, game_post_id, payload.user_id)
        .await?;
    let game_post = service.get(game_post_id).await?;

    Ok((StatusCode::OK, Json(game_post.into_dto())))
}
