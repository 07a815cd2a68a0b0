//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific slice of session data so that keys
//! and value types live in one place.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user ID)
//! - `CsrfSession` - CSRF token management for OAuth flows
//! - `BootstrapSession` - One-shot flag set when a valid bootstrap code was presented at login
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_BOOTSTRAP: &str = "auth:bootstrap";

/// Authentication session management.
///
/// Handles the authenticated user's database ID and session lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Called after a successful OAuth callback to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove authentication state and any leftover OAuth flow data.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Consumes the stored token and compares it with the `state` returned by the provider.
    ///
    /// # Returns
    /// - `Ok(())` - Stored token matched `state`
    /// - `Err(AppError::AuthErr(CsrfValidationFailed))` - No token stored, or it did not match
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(stored) if stored == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}

/// Bootstrap flow state.
///
/// Persists across the redirect to the OAuth provider and back so the callback knows
/// to promote the signing-in user to `SUPER_ADMIN`.
pub struct BootstrapSession<'a> {
    session: &'a Session,
}

impl<'a> BootstrapSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_flag(&self, bootstrap: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_BOOTSTRAP, bootstrap)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the bootstrap flag.
    ///
    /// # Returns
    /// - `Ok(true)` - A valid bootstrap code was presented at login
    /// - `Ok(false)` - Regular login
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_flag(&self) -> Result<bool, AppError> {
        let bootstrap = self
            .session
            .remove(SESSION_AUTH_BOOTSTRAP)
            .await?
            .unwrap_or(false);
        Ok(bootstrap)
    }
}
