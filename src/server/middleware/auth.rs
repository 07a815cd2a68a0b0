use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// A single access requirement checked by [`AuthGuard::require`].
#[derive(Debug, Clone, Copy)]
pub enum Permission {
    /// The user's role must be at least this tier.
    Role(Role),
    /// The user must be the author with the given ID, or at least `ADMIN`.
    Owner(i32),
}

impl Permission {
    /// Checks this permission against an already loaded user.
    ///
    /// Services use this for ownership checks that need the resource loaded first.
    ///
    /// # Returns
    /// - `Err(AppError::AuthErr(AccessDenied))` - The permission is not met
    pub fn check(&self, user: &User) -> Result<(), AppError> {
        match *self {
            Permission::Role(min) => {
                if user.role < min {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!(
                            "User has role {} but {} is required",
                            user.role.as_str(),
                            min.as_str()
                        ),
                    )
                    .into());
                }
            }
            Permission::Owner(author_id) => {
                if user.id != author_id && !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("User is not the author ({}) nor an admin", author_id),
                    )
                    .into());
                }
            }
        }

        Ok(())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the signed-in user and checks every permission in order.
    ///
    /// An empty permission list only requires a signed-in user, which admits suspended
    /// (`NONE`) accounts for read access.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user satisfying all permissions
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is signed in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The session user no longer exists
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            permission.check(&user)?;
        }

        Ok(user)
    }

    /// Returns the signed-in user if there is one, without enforcing anything.
    ///
    /// Used by endpoints that are public but show more to admins.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        UserRepository::new(self.db).find_by_id(user_id).await
    }
}
