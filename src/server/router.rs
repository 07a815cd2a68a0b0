use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, board, game, game_post, notice, notification, profile, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "GameMate API", description = "Community boards, game recruitment and notices"),
    tags(
        (name = "auth", description = "OAuth login and session"),
        (name = "user", description = "User administration"),
        (name = "profile", description = "User profiles"),
        (name = "board", description = "Channels, boards, posts and comments"),
        (name = "game", description = "Game catalog"),
        (name = "game_post", description = "Game recruitment posts"),
        (name = "notice", description = "Announcements"),
        (name = "notification", description = "Per-user notifications and settings"),
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document with Swagger UI at `/api/docs`.
///
/// Handlers grouped in one `routes!` call share a path and differ by method.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // Users and profiles
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::set_role))
        .routes(routes!(profile::get_my_profile, profile::update_my_profile))
        .routes(routes!(profile::get_profile))
        // Boards
        .routes(routes!(board::get_channels, board::create_channel))
        .routes(routes!(board::create_board))
        .routes(routes!(board::get_posts, board::create_post))
        .routes(routes!(board::get_post, board::update_post, board::delete_post))
        .routes(routes!(board::get_comments, board::create_comment))
        .routes(routes!(board::delete_comment))
        // Games
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        // Game posts
        .routes(routes!(game_post::get_game_posts, game_post::create_game_post))
        .routes(routes!(
            game_post::get_game_post,
            game_post::update_game_post,
            game_post::delete_game_post
        ))
        .routes(routes!(game_post::start_game_post))
        .routes(routes!(game_post::complete_game_post))
        .routes(routes!(game_post::join_game_post))
        .routes(routes!(game_post::wait_for_game_post))
        .routes(routes!(game_post::leave_game_post))
        .routes(routes!(game_post::invite_to_game_post))
        .routes(routes!(game_post::accept_invitation))
        .routes(routes!(game_post::decline_invitation))
        .routes(routes!(game_post::accept_waiting))
        .routes(routes!(game_post::add_guest))
        .routes(routes!(game_post::remove_participant))
        .routes(routes!(game_post::transfer_leader))
        // Notices
        .routes(routes!(notice::get_notices))
        .routes(routes!(notice::get_notice))
        .routes(routes!(notice::get_all_notices, notice::create_notice))
        .routes(routes!(notice::update_notice, notice::delete_notice))
        .routes(routes!(notice::publish_notice))
        .routes(routes!(notice::unpublish_notice))
        .routes(routes!(notice::set_notice_pinned))
        // Notifications
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(notification::get_settings, notification::update_settings))
        .routes(routes!(notification::mark_read))
        .routes(routes!(notification::delete_notification))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
