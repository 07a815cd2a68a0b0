//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the OAuth token exchange and userinfo requests
//! - OAuth2 client for provider login
//! - Bootstrap code service for claiming the first `SUPER_ADMIN`
//! - Application and userinfo URLs

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::bootstrap::BootstrapCodeService;

/// OAuth2 client with the authorization and token endpoints set.
pub type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `BootstrapCodeService` uses `Arc` for shared state
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured without redirect following. Used for the token exchange and the
    /// provider's userinfo endpoint.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the provider login flow.
    ///
    /// Handles the OAuth2 authentication flow including generating login URLs
    /// and exchanging authorization codes for access tokens.
    pub oauth_client: OAuth2Client,

    /// One-time code that lets the first login claim `SUPER_ADMIN`.
    pub bootstrap_code_service: BootstrapCodeService,

    /// Application base URL, the redirect target after login and logout.
    pub app_url: String,

    /// Provider endpoint returning the signed-in user's identity.
    pub oauth_userinfo_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for provider login
    /// - `bootstrap_code_service` - Holder of the bootstrap code
    /// - `app_url` - Application base URL
    /// - `oauth_userinfo_url` - Provider userinfo endpoint
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        bootstrap_code_service: BootstrapCodeService,
        app_url: String,
        oauth_userinfo_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            bootstrap_code_service,
            app_url,
            oauth_userinfo_url,
        }
    }
}
