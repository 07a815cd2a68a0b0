//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{DisplayNames, UpsertUserParam, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user on first login or refreshes the provider data on later logins.
    ///
    /// New users start with the `USER` role. The role of an existing user is never
    /// modified here.
    ///
    /// # Returns
    /// - `Ok((User, true))` - A new user was created
    /// - `Ok((User, false))` - An existing user was updated
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<(User, bool), AppError> {
        let now = Utc::now();

        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::OauthId.eq(param.oauth_id.as_str()))
            .one(self.db)
            .await?;

        let (entity, created) = match existing {
            Some(existing) => {
                let mut active_model: entity::user::ActiveModel = existing.into();
                active_model.name = ActiveValue::Set(param.name);
                active_model.email = ActiveValue::Set(param.email);
                active_model.updated_at = ActiveValue::Set(now);
                (active_model.update(self.db).await?, false)
            }
            None => {
                let entity = entity::user::ActiveModel {
                    oauth_id: ActiveValue::Set(param.oauth_id),
                    name: ActiveValue::Set(param.name),
                    email: ActiveValue::Set(param.email),
                    role: ActiveValue::Set(Role::User.as_str().to_string()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                (entity, true)
            }
        };

        Ok((User::from_entity(entity)?, created))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets all users with pagination, oldest account first.
    ///
    /// # Returns
    /// - `Ok((users, total, total_pages))` - Users on the requested zero-indexed page
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, totals.number_of_items, totals.number_of_pages))
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user exists with that ID
    pub async fn set_role(&self, user_id: i32, role: Role) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Checks whether any user holds exactly `role`.
    pub async fn role_exists(&self, role: Role) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// IDs of every user whose role is at least `role`.
    pub async fn get_ids_with_min_role(&self, role: Role) -> Result<Vec<i32>, AppError> {
        let roles: Vec<&str> = role.and_above().iter().map(|r| r.as_str()).collect();

        let ids = entity::prelude::User::find()
            .filter(entity::user::Column::Role.is_in(roles))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        Ok(ids)
    }

    /// Resolves display names for the given users: the profile nickname when one exists,
    /// the provider name otherwise. Unknown IDs are left out.
    pub async fn get_display_names(&self, user_ids: &[i32]) -> Result<DisplayNames, AppError> {
        if user_ids.is_empty() {
            return Ok(DisplayNames::default());
        }

        let rows = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .find_also_related(entity::prelude::UserProfile)
            .all(self.db)
            .await?;

        let names = rows
            .into_iter()
            .map(|(user, profile)| {
                let name = profile.map(|p| p.nickname).unwrap_or(user.name);
                (user.id, name)
            })
            .collect();

        Ok(DisplayNames(names))
    }
}
