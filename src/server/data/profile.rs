//! Profile data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{
        profile::{Profile, UpdateProfileParams},
        user::parse_role,
    },
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the profile of a user.
    ///
    /// A user without a profile row falls back to the provider name as nickname.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The user exists
    /// - `Ok(None)` - No user with that ID
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Profile>, AppError> {
        let Some((user, profile)) = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::UserProfile)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let role = parse_role(&user.role)?;
        let profile = match profile {
            Some(profile) => Profile {
                user_id: user.id,
                nickname: profile.nickname,
                bio: profile.bio,
                avatar_url: profile.avatar_url,
                role,
                member_since: user.created_at,
            },
            None => Profile {
                user_id: user.id,
                nickname: user.name,
                bio: None,
                avatar_url: None,
                role,
                member_since: user.created_at,
            },
        };

        Ok(Some(profile))
    }

    pub async fn exists(&self, user_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::UserProfile::find_by_id(user_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether `nickname` belongs to a user other than `except_user_id`.
    pub async fn nickname_taken(
        &self,
        nickname: &str,
        except_user_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut query = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::Nickname.eq(nickname));

        if let Some(user_id) = except_user_id {
            query = query.filter(entity::user_profile::Column::UserId.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, user_id: i32, nickname: String) -> Result<(), AppError> {
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            nickname: ActiveValue::Set(nickname),
            bio: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Applies profile changes. The profile row must already exist.
    pub async fn update(&self, user_id: i32, params: UpdateProfileParams) -> Result<(), AppError> {
        let existing = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| InternalError::MissingRow(format!("user_profile {}", user_id)))?;

        let mut active_model: entity::user_profile::ActiveModel = existing.into();
        if let Some(nickname) = params.nickname {
            active_model.nickname = ActiveValue::Set(nickname);
        }
        if let Some(bio) = params.bio {
            active_model.bio = ActiveValue::Set(bio);
        }
        if let Some(avatar_url) = params.avatar_url {
            active_model.avatar_url = ActiveValue::Set(avatar_url);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }
}
