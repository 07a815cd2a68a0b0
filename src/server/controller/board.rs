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
        board::{
            BoardDto, ChannelDto, CommentDto, CreateBoardDto, CreateChannelDto,
            CreateCommentDto, CreatePostDto, PaginatedPostsDto, PostDto, UpdatePostDto,
        },
        user::Role,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::board::{
            CreateBoardParams, CreateChannelParams, CreatePostParams, UpdatePostParams,
        },
        service::{board::BoardService, comment::CommentService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping channel, board, post and comment endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// List every channel with its boards.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/channels",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "All channels with their boards", body = Vec<ChannelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let channels = BoardService::new(&state.db).list_channels().await?;

    let channels_dto: Vec<ChannelDto> = channels.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(channels_dto)))
}

/// Create a channel.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Returns
/// - `201 Created` - The new channel
/// - `400 Bad Request` - Invalid name or slug
/// - `409 Conflict` - Slug already taken
#[utoipa::path(
    post,
    path = "/api/channels",
    tag = BOARD_TAG,
    request_body = CreateChannelDto,
    responses(
        (status = 201, description = "Channel created", body = ChannelDto),
        (status = 400, description = "Invalid channel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_channel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let channel = BoardService::new(&state.db)
        .create_channel(CreateChannelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(channel.into_dto())))
}

/// Create a board inside a channel.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Returns
/// - `201 Created` - The new board
/// - `400 Bad Request` - Invalid name or slug
/// - `404 Not Found` - Unknown channel
/// - `409 Conflict` - Slug already taken in this channel
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/boards",
    tag = BOARD_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board created", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let board = BoardService::new(&state.db)
        .create_board(CreateBoardParams::from_dto(channel_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// List the posts of a board, newest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/posts",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated posts", body = PaginatedPostsDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Path(board_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db)
        .list(board_id, params.page(), params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Write a post on a board.
///
/// # Access Control
/// - At least the board's `write_role`, and never below `USER`
#[utoipa::path(
    post,
    path = "/api/boards/{board_id}/posts",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role too low for this board", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .create(&user, CreatePostParams::from_dto(board_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a post. Each call counts as a view.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(post_id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Edit a post.
///
/// # Access Control
/// - Author of the post, or `ADMIN` and above
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let post = PostService::new(&state.db)
        .update(&user, post_id, UpdatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post.
///
/// # Access Control
/// - Author of the post, or `ADMIN` and above
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    PostService::new(&state.db).delete(&user, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the comments of a post, oldest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = BOARD_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments of the post", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let thread = CommentService::new(&state.db).list(post_id).await?;

    Ok((StatusCode::OK, Json(thread.into_dto())))
}

/// Comment on a post.
///
/// The post author is notified unless they wrote the comment. The response is the
/// post's full comment thread.
///
/// # Access Control
/// - `USER` and above
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = BOARD_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = Vec<CommentDto>),
        (status = 400, description = "Empty or overlong comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    let service = CommentService::new(&state.db);
    service.create(&user, post_id, payload.content).await?;
    let thread = service.list(post_id).await?;

    Ok((StatusCode::CREATED, Json(thread.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - Author of the comment, or `ADMIN` and above
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = BOARD_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::User)])
        .await?;

    CommentService::new(&state.db)
        .delete(&user, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
