use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::user::UserService,
    state::OAuth2Client,
};

/// User information returned by the provider's userinfo endpoint.
///
/// Providers disagree on field names; `sub` is accepted for the subject and
/// `username` when no display name is given.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUser {
    #[serde(alias = "sub")]
    pub id: serde_json::Value,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl ProviderUser {
    fn into_upsert_param(self) -> Result<UpsertUserParam, AppError> {
        let oauth_id = match self.id {
            serde_json::Value::String(id) => id,
            serde_json::Value::Number(id) => id.to_string(),
            other => {
                return Err(AppError::InternalError(format!(
                    "Provider returned an unusable user id: {}",
                    other
                )))
            }
        };

        let name = self
            .name
            .or(self.username)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Player {}", oauth_id));

        Ok(UpsertUserParam {
            oauth_id,
            name,
            email: self.email,
        })
    }
}

/// Service for the OAuth2 authorization-code login flow.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the provider login URL with a fresh CSRF state token.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }

    /// Finishes a login: exchanges the code, fetches the provider user and records them.
    ///
    /// # Arguments
    /// - `authorization_code` - Code returned by the provider to the callback
    /// - `bootstrap` - A valid bootstrap code was presented when the login started
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - The userinfo request failed
    pub async fn callback(
        &self,
        authorization_code: String,
        bootstrap: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let provider_user = self.fetch_provider_user(&token).await?;

        UserService::new(self.db)
            .record_login(provider_user.into_upsert_param()?, bootstrap)
            .await
    }

    async fn fetch_provider_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<ProviderUser, AppError> {
        let user = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUser>()
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_user(json: serde_json::Value) -> ProviderUser {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn accepts_numeric_subject_and_username() {
        let param = provider_user(serde_json::json!({
            "id": 80351110224678912u64,
            "username": "nelly",
        }))
        .into_upsert_param()
        .unwrap();

        assert_eq!(param.oauth_id, "80351110224678912");
        assert_eq!(param.name, "nelly");
        assert_eq!(param.email, None);
    }

    #[test]
    fn prefers_name_over_username() {
        let param = provider_user(serde_json::json!({
            "sub": "abc-123",
            "name": "  Nelly  ",
            "username": "nelly",
            "email": "nelly@example.com",
        }))
        .into_upsert_param()
        .unwrap();

        assert_eq!(param.oauth_id, "abc-123");
        assert_eq!(param.name, "Nelly");
        assert_eq!(param.email.as_deref(), Some("nelly@example.com"));
    }

    #[test]
    fn falls_back_to_generated_name() {
        let param = provider_user(serde_json::json!({ "id": "42", "name": "" }))
            .into_upsert_param()
            .unwrap();

        assert_eq!(param.name, "Player 42");
    }

    #[test]
    fn rejects_non_scalar_subject() {
        let result = provider_user(serde_json::json!({ "id": null })).into_upsert_param();

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
