use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::profile::{
        Profile, UpdateProfileParams, MAX_BIO_LENGTH, MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH,
    },
    util::validate::{require_http_url, require_length},
};

pub struct ProfileService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get(&self, user_id: i32) -> Result<Profile, AppError> {
        ProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Updates the caller's profile, creating the row if the user never had one.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(AppError::BadRequest)` - A field fails validation
    /// - `Err(AppError::Conflict)` - Another user already has the nickname
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<Profile, AppError> {
        if let Some(nickname) = &params.nickname {
            require_length(
                "Nickname",
                nickname,
                MIN_NICKNAME_LENGTH,
                MAX_NICKNAME_LENGTH,
            )?;
        }
        if let Some(Some(bio)) = &params.bio {
            require_length("Bio", bio, 0, MAX_BIO_LENGTH)?;
        }
        if let Some(Some(avatar_url)) = &params.avatar_url {
            require_http_url("Avatar URL", avatar_url)?;
        }

        let txn = self.db.begin().await?;
        let profile_repo = ProfileRepository::new(&txn);

        let current = profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        if let Some(nickname) = &params.nickname {
            if profile_repo.nickname_taken(nickname, Some(user_id)).await? {
                return Err(AppError::Conflict(format!(
                    "The nickname '{}' is already taken",
                    nickname
                )));
            }
        }

        if !profile_repo.exists(user_id).await? {
            profile_repo.create(user_id, current.nickname).await?;
        }
        profile_repo.update(user_id, params).await?;

        let profile = profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        txn.commit().await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod test;
