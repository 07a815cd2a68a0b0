//! User service for business logic.
//!
//! This module provides the `UserService` for account management: recording logins,
//! listing accounts for admins and changing roles.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{profile::ProfileRepository, user::UserRepository},
        error::{internal::InternalError, AppError},
        model::{
            profile::{MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH},
            user::{PaginatedUsers, UpsertUserParam, User},
        },
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a provider login in one transaction.
    ///
    /// Upserts the user and gives users without a profile one whose nickname is the
    /// provider name, made unique with a `#n` suffix. When `bootstrap` is set the user is
    /// promoted to `SUPER_ADMIN`; otherwise logging in never changes an existing role.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user with their current role
    /// - `Err(AppError::DbErr)` - Database error during the upsert
    pub async fn record_login(
        &self,
        param: UpsertUserParam,
        bootstrap: bool,
    ) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let (mut user, created) = UserRepository::new(&txn).upsert(param).await?;

        let profile_repo = ProfileRepository::new(&txn);
        if !profile_repo.exists(user.id).await? {
            let nickname = unique_nickname(&txn, &user.name).await?;
            profile_repo.create(user.id, nickname).await?;
        }

        if bootstrap {
            user = UserRepository::new(&txn)
                .set_role(user.id, Role::SuperAdmin)
                .await?
                .ok_or_else(|| InternalError::MissingRow(format!("user {}", user.id)))?;
        }

        txn.commit().await?;

        if created {
            tracing::info!("New user {} ({}) signed up", user.id, user.name);
        }
        if bootstrap {
            tracing::info!("User {} has been granted SUPER_ADMIN", user.name);
        }

        Ok(user)
    }

    /// Retrieves users with pagination, oldest account first.
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total, total_pages) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Changes the role of another user.
    ///
    /// # Arguments
    /// - `actor_id` - The `SUPER_ADMIN` performing the change
    /// - `user_id` - The user whose role changes
    /// - `role` - The new role
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::BadRequest)` - The actor tried to change their own role
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_role(&self, actor_id: i32, user_id: i32, role: Role) -> Result<User, AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot change your own role".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} set role of user {} to {}",
            actor_id,
            user_id,
            role.as_str()
        );

        Ok(user)
    }
}

/// Picks a nickname based on `name` that no profile uses yet.
///
/// The name is cut to the nickname limit. On collision a `#n` suffix is appended,
/// starting at 2, and the base shortened so the result still fits.
async fn unique_nickname<C: ConnectionTrait>(db: &C, name: &str) -> Result<String, AppError> {
    let profile_repo = ProfileRepository::new(db);

    let mut base: String = name.trim().chars().take(MAX_NICKNAME_LENGTH).collect();
    while base.chars().count() < MIN_NICKNAME_LENGTH {
        base.push('_');
    }

    if !profile_repo.nickname_taken(&base, None).await? {
        return Ok(base);
    }

    let mut n: u32 = 2;
    loop {
        let suffix = format!("#{}", n);
        let keep = MAX_NICKNAME_LENGTH.saturating_sub(suffix.len());
        let candidate: String = base.chars().take(keep).chain(suffix.chars()).collect();

        if !profile_repo.nickname_taken(&candidate, None).await? {
            return Ok(candidate);
        }
        n += 1;
    }
}

#[cfg(test)]
mod test;
