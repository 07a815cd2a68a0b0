use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePostStatus {
    Open,
    Full,
    InProgress,
    Completed,
}

impl GamePostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePostStatus::Open => "OPEN",
            GamePostStatus::Full => "FULL",
            GamePostStatus::InProgress => "IN_PROGRESS",
            GamePostStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OPEN" => Some(GamePostStatus::Open),
            "FULL" => Some(GamePostStatus::Full),
            "IN_PROGRESS" => Some(GamePostStatus::InProgress),
            "COMPLETED" => Some(GamePostStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Member,
    Guest,
}

impl ParticipantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Member => "MEMBER",
            ParticipantType::Guest => "GUEST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MEMBER" => Some(ParticipantType::Member),
            "GUEST" => Some(ParticipantType::Guest),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaitingStatus {
    Waiting,
    Invited,
    TimeWaiting,
}

impl WaitingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitingStatus::Waiting => "WAITING",
            WaitingStatus::Invited => "INVITED",
            WaitingStatus::TimeWaiting => "TIME_WAITING",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "WAITING" => Some(WaitingStatus::Waiting),
            "INVITED" => Some(WaitingStatus::Invited),
            "TIME_WAITING" => Some(WaitingStatus::TimeWaiting),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateGamePostDto {
    pub game_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Falls back to the game's default when omitted.
    pub max_participants: Option<i32>,
    pub start_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct UpdateGamePostDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub max_participants: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub display_name: String,
    pub participant_type: ParticipantType,
    pub is_leader: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaitingParticipantDto {
    pub id: i32,
    pub user_id: i32,
    pub display_name: String,
    pub status: WaitingStatus,
    pub available_time: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GamePostDto {
    pub id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub max_participants: i32,
    pub status: GamePostStatus,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<ParticipantDto>,
    pub waiting: Vec<WaitingParticipantDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GamePostListItemDto {
    pub id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub title: String,
    pub leader_name: Option<String>,
    pub max_participants: i32,
    pub participant_count: u64,
    pub waiting_count: u64,
    pub status: GamePostStatus,
    pub start_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedGamePostsDto {
    pub game_posts: Vec<GamePostListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(tag = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinResultDto {
    Joined,
    /// `position` is 1-based among `WAITING` entries.
    Waitlisted { position: u64 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(tag = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveResultDto {
    LeftWaitingList,
    Left {
        promoted_user_ids: Vec<i32>,
        new_leader_id: Option<i32>,
    },
    Deleted,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaitUntilDto {
    pub available_time: DateTime<Utc>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InviteDto {
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AddGuestDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TransferLeaderDto {
    pub user_id: i32,
}
