use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub default_max_participants: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateGameDto {
    pub name: String,
    pub image_url: Option<String>,
    pub default_max_participants: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct UpdateGameDto {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub default_max_participants: Option<i32>,
}
