use chrono::{DateTime, Utc};

use crate::model::game::{CreateGameDto, GameDto, UpdateGameDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    /// Capacity used for new game posts that do not set their own.
    pub default_max_participants: i32,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            default_max_participants: entity.default_max_participants,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            default_max_participants: self.default_max_participants,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameParams {
    pub name: String,
    pub image_url: Option<String>,
    pub default_max_participants: i32,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            image_url: dto
                .image_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            default_max_participants: dto.default_max_participants,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGameParams {
    pub name: Option<String>,
    /// `Some(None)` removes the image.
    pub image_url: Option<Option<String>>,
    pub default_max_participants: Option<i32>,
}

impl UpdateGameParams {
    pub fn from_dto(dto: UpdateGameDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            image_url: dto.image_url.map(|u| {
                let u = u.trim().to_string();
                (!u.is_empty()).then_some(u)
            }),
            default_max_participants: dto.default_max_participants,
        }
    }
}
