//! User domain models and parameters.
//!
//! A user is created on first OAuth login and carries the single `Role` used by every
//! permission check. Display names come from the user's profile nickname when one exists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, Role, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Signed-in account as stored in the `user` table.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject identifier returned by the OAuth provider.
    pub oauth_id: String,
    /// Name reported by the provider at last login.
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_role(&entity.role)?;

        Ok(Self {
            id: entity.id,
            oauth_id: entity.oauth_id,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

pub fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::from_name(value).ok_or_else(|| {
        InternalError::InvalidStoredValue {
            column: "user.role",
            value: value.to_string(),
        }
        .into()
    })
}

/// Parameters for upserting a user after an OAuth callback.
///
/// The role is never touched by an upsert of an existing user; new users start as `USER`.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub oauth_id: String,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Resolved display names keyed by user ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayNames(pub HashMap<i32, String>);

impl DisplayNames {
    pub fn get(&self, user_id: i32) -> String {
        self.0
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| format!("User #{}", user_id))
    }
}
