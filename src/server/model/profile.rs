use chrono::{DateTime, Utc};

use crate::model::{
    profile::{ProfileDto, UpdateProfileDto},
    user::Role,
};

pub const MIN_NICKNAME_LENGTH: usize = 2;
pub const MAX_NICKNAME_LENGTH: usize = 20;
pub const MAX_BIO_LENGTH: usize = 500;

/// Public profile of a user, combining the `user_profile` row with account data.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: i32,
    pub nickname: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub member_since: DateTime<Utc>,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            nickname: self.nickname,
            bio: self.bio,
            avatar_url: self.avatar_url,
            role: self.role,
            member_since: self.member_since,
        }
    }
}

/// Profile changes. The outer `Option` is "leave unchanged", the inner one clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParams {
    pub nickname: Option<String>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        fn clearable(value: Option<String>) -> Option<Option<String>> {
            value.map(|v| {
                let v = v.trim().to_string();
                (!v.is_empty()).then_some(v)
            })
        }

        Self {
            nickname: dto.nickname.map(|n| n.trim().to_string()),
            bio: clearable(dto.bio),
            avatar_url: clearable(dto.avatar_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_clear_optional_fields() {
        let params = UpdateProfileParams::from_dto(UpdateProfileDto {
            nickname: Some("  Raider  ".to_string()),
            bio: Some("   ".to_string()),
            avatar_url: None,
        });

        assert_eq!(params.nickname.as_deref(), Some("Raider"));
        assert_eq!(params.bio, Some(None));
        assert_eq!(params.avatar_url, None);
    }
}
