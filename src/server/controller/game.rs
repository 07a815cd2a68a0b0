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
        game::{CreateGameDto, GameDto, UpdateGameDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game::{CreateGameParams, UpdateGameParams},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game catalog endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List the game catalog, ordered by name.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;

    let games_dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "The game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get(game_id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Add a game to the catalog.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Returns
/// - `201 Created` - The new game
/// - `400 Bad Request` - Invalid name or default participant count
/// - `409 Conflict` - A game with this name already exists
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Game name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let game = GameService::new(&state.db)
        .create(CreateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Edit a game.
///
/// # Access Control
/// - `ADMIN` and above
#[utoipa::path(
    put,
    path = "/api/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Game updated", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Game name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let game = GameService::new(&state.db)
        .update(game_id, UpdateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Remove a game from the catalog.
///
/// # Access Control
/// - `ADMIN` and above
///
/// # Returns
/// - `204 No Content` - Game deleted
/// - `404 Not Found` - Game not found
/// - `409 Conflict` - Game posts still reference the game
#[utoipa::path(
    delete,
    path = "/api/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Game is still in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    GameService::new(&state.db).delete(game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
