use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::notification::UpdateNotificationSettingsDto,
    server::{
        controller::{game_post, notification},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::bootstrap::BootstrapCodeService,
        state::AppState,
    },
};


/// Builds handler state around `db` with placeholder provider endpoints.
fn test_state(db: &DatabaseConnection) -> AppState {
    let oauth_client = BasicClient::new(ClientId::new("client".to_string()))
        .set_client_secret(ClientSecret::new("secret".to_string()))
        .set_auth_uri(AuthUrl::new("http://localhost/oauth/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("http://localhost/oauth/token".to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/api/auth/callback".to_string()).unwrap(),
        );

    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        oauth_client,
        BootstrapCodeService::new(),
        "http://localhost:8080".to_string(),
        "http://localhost/oauth/userinfo".to_string(),
    )
}
