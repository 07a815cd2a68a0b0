//! Game post domain models, parameters and the recruitment rules.
//!
//! A game post recruits players for a session of a game. Its participants are members
//! (accounts) and guests (names added by the leader), capped by `max_participants`.
//! Users that arrive when the post is full go to the waiting list. The functions in this
//! module are the pure rules the service applies inside its transactions:
//!
//! - status derivation from the head count ([`GamePostStatus::derived`])
//! - allowed lifecycle transitions ([`GamePostStatus::can_transition_to`])
//! - who gets promoted from the waiting list ([`next_promotions`])
//! - who inherits leadership ([`next_leader`])

use chrono::{DateTime, Utc};

use crate::{
    model::game_post::{
        CreateGamePostDto, GamePostDto, GamePostListItemDto, GamePostStatus, JoinResultDto,
        LeaveResultDto, PaginatedGamePostsDto, ParticipantDto, ParticipantType,
        UpdateGamePostDto, WaitingParticipantDto, WaitingStatus,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::user::DisplayNames,
    },
};

/// Hours after `start_time` at which an in-progress post is completed automatically.
pub const AUTO_COMPLETE_AFTER_HOURS: i64 = 6;

pub const MIN_PARTICIPANTS: i32 = 2;
pub const MAX_PARTICIPANTS: i32 = 100;

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_GUEST_NAME_LENGTH: usize = 30;
pub const MAX_WAIT_MESSAGE_LENGTH: usize = 200;

impl GamePostStatus {
    /// Status implied by the head count.
    ///
    /// Only `OPEN` and `FULL` follow the count; `IN_PROGRESS` and `COMPLETED` are
    /// returned unchanged.
    pub fn derived(self, participant_count: usize, max_participants: i32) -> Self {
        match self {
            GamePostStatus::Open | GamePostStatus::Full => {
                if free_slots(participant_count, max_participants) == 0 {
                    GamePostStatus::Full
                } else {
                    GamePostStatus::Open
                }
            }
            other => other,
        }
    }

    /// Whether participants and waiting entries may change.
    pub fn accepts_members(self) -> bool {
        matches!(self, GamePostStatus::Open | GamePostStatus::Full)
    }

    /// Lifecycle transitions triggered by the leader or the scheduler.
    pub fn can_transition_to(self, next: GamePostStatus) -> bool {
        matches!(
            (self, next),
            (
                GamePostStatus::Open | GamePostStatus::Full,
                GamePostStatus::InProgress
            ) | (GamePostStatus::InProgress, GamePostStatus::Completed)
        )
    }
}

pub fn free_slots(participant_count: usize, max_participants: i32) -> usize {
    usize::try_from(max_participants)
        .unwrap_or(0)
        .saturating_sub(participant_count)
}

/// Picks up to `slots` `WAITING` entries, oldest first.
///
/// `TIME_WAITING` and `INVITED` entries are never promoted automatically.
pub fn next_promotions(waiting: &[WaitingEntry], slots: usize) -> Vec<&WaitingEntry> {
    let mut candidates: Vec<&WaitingEntry> = waiting
        .iter()
        .filter(|w| w.status == WaitingStatus::Waiting)
        .collect();
    candidates.sort_by_key(|w| (w.created_at, w.id));
    candidates.truncate(slots);
    candidates
}

/// Earliest-joined member, the heir when the leader leaves.
pub fn next_leader(participants: &[Participant]) -> Option<&Participant> {
    participants
        .iter()
        .filter(|p| p.participant_type == ParticipantType::Member && p.user_id.is_some())
        .min_by_key(|p| (p.joined_at, p.id))
}

/// 1-based position of `user_id` among `WAITING` entries.
pub fn waiting_position(waiting: &[WaitingEntry], user_id: i32) -> Option<u64> {
    next_promotions(waiting, usize::MAX)
        .iter()
        .position(|w| w.user_id == user_id)
        .map(|index| index as u64 + 1)
}

/// Leader first, then by join order.
pub fn sort_participants(participants: &mut [Participant]) {
    participants.sort_by_key(|p| (!p.is_leader, p.joined_at, p.id));
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamePost {
    pub id: i32,
    pub game_id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub max_participants: i32,
    pub status: GamePostStatus,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GamePost {
    pub fn from_entity(entity: entity::game_post::Model) -> Result<Self, AppError> {
        let status = GamePostStatus::from_name(&entity.status).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "game_post.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            game_id: entity.game_id,
            author_id: entity.author_id,
            title: entity.title,
            description: entity.description,
            max_participants: entity.max_participants,
            status,
            start_time: entity.start_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub game_post_id: i32,
    /// `None` for guests.
    pub user_id: Option<i32>,
    pub guest_name: Option<String>,
    pub participant_type: ParticipantType,
    pub is_leader: bool,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn from_entity(entity: entity::game_participant::Model) -> Result<Self, AppError> {
        let participant_type =
            ParticipantType::from_name(&entity.participant_type).ok_or_else(|| {
                InternalError::InvalidStoredValue {
                    column: "game_participant.participant_type",
                    value: entity.participant_type.clone(),
                }
            })?;

        Ok(Self {
            id: entity.id,
            game_post_id: entity.game_post_id,
            user_id: entity.user_id,
            guest_name: entity.guest_name,
            participant_type,
            is_leader: entity.is_leader,
            joined_at: entity.joined_at,
        })
    }

    pub fn is_member(&self, user_id: i32) -> bool {
        self.participant_type == ParticipantType::Member && self.user_id == Some(user_id)
    }

    pub fn into_dto(self, names: &DisplayNames) -> ParticipantDto {
        let display_name = match (&self.guest_name, self.user_id) {
            (Some(guest), _) => guest.clone(),
            (None, Some(user_id)) => names.get(user_id),
            (None, None) => "Guest".to_string(),
        };

        ParticipantDto {
            id: self.id,
            user_id: self.user_id,
            display_name,
            participant_type: self.participant_type,
            is_leader: self.is_leader,
            joined_at: self.joined_at,
        }
    }
}

/// Row of the waiting list: queued, invited, or waiting until a given time.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitingEntry {
    pub id: i32,
    pub game_post_id: i32,
    pub user_id: i32,
    pub status: WaitingStatus,
    pub available_time: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WaitingEntry {
    pub fn from_entity(entity: entity::waiting_participant::Model) -> Result<Self, AppError> {
        let status = WaitingStatus::from_name(&entity.status).ok_or_else(|| {
            InternalError::InvalidStoredValue {
                column: "waiting_participant.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            game_post_id: entity.game_post_id,
            user_id: entity.user_id,
            status,
            available_time: entity.available_time,
            message: entity.message,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self, names: &DisplayNames) -> WaitingParticipantDto {
        WaitingParticipantDto {
            id: self.id,
            user_id: self.user_id,
            display_name: names.get(self.user_id),
            status: self.status,
            available_time: self.available_time,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Game post with its roster, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePostDetail {
    pub post: GamePost,
    pub game_name: String,
    /// Sorted with [`sort_participants`].
    pub participants: Vec<Participant>,
    /// Sorted by arrival.
    pub waiting: Vec<WaitingEntry>,
    pub names: DisplayNames,
}

impl GamePostDetail {
    pub fn into_dto(self) -> GamePostDto {
        let names = self.names;

        GamePostDto {
            id: self.post.id,
            game_id: self.post.game_id,
            game_name: self.game_name,
            author_id: self.post.author_id,
            title: self.post.title,
            description: self.post.description,
            max_participants: self.post.max_participants,
            status: self.post.status,
            start_time: self.post.start_time,
            created_at: self.post.created_at,
            participants: self
                .participants
                .into_iter()
                .map(|p| p.into_dto(&names))
                .collect(),
            waiting: self.waiting.into_iter().map(|w| w.into_dto(&names)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamePostSummary {
    pub post: GamePost,
    pub game_name: String,
    pub leader_name: Option<String>,
    pub participant_count: u64,
    pub waiting_count: u64,
}

impl GamePostSummary {
    pub fn into_dto(self) -> GamePostListItemDto {
        GamePostListItemDto {
            id: self.post.id,
            game_id: self.post.game_id,
            game_name: self.game_name,
            title: self.post.title,
            leader_name: self.leader_name,
            max_participants: self.post.max_participants,
            participant_count: self.participant_count,
            waiting_count: self.waiting_count,
            status: self.post.status,
            start_time: self.post.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedGamePosts {
    pub game_posts: Vec<GamePostSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGamePosts {
    pub fn into_dto(self) -> PaginatedGamePostsDto {
        PaginatedGamePostsDto {
            game_posts: self.game_posts.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Query for the game post list, ordered by `start_time` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePostFilter {
    pub game_id: Option<i32>,
    pub status: Option<GamePostStatus>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGamePostParams {
    pub game_id: i32,
    pub title: String,
    pub description: String,
    pub max_participants: Option<i32>,
    pub start_time: DateTime<Utc>,
}

impl CreateGamePostParams {
    pub fn from_dto(dto: CreateGamePostDto) -> Self {
        Self {
            game_id: dto.game_id,
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            max_participants: dto.max_participants,
            start_time: dto.start_time,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGamePostParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub max_participants: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
}

impl UpdateGamePostParams {
    pub fn from_dto(dto: UpdateGamePostDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            max_participants: dto.max_participants,
            start_time: dto.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    Joined,
    Waitlisted { position: u64 },
}

impl JoinOutcome {
    pub fn into_dto(self) -> JoinResultDto {
        match self {
            JoinOutcome::Joined => JoinResultDto::Joined,
            JoinOutcome::Waitlisted { position } => JoinResultDto::Waitlisted { position },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaveOutcome {
    LeftWaitingList,
    Left {
        promoted_user_ids: Vec<i32>,
        new_leader_id: Option<i32>,
    },
    /// The last member left and the post was removed.
    Deleted,
}

impl LeaveOutcome {
    pub fn into_dto(self) -> LeaveResultDto {
        match self {
            LeaveOutcome::LeftWaitingList => LeaveResultDto::LeftWaitingList,
            LeaveOutcome::Left {
                promoted_user_ids,
                new_leader_id,
            } => LeaveResultDto::Left {
                promoted_user_ids,
                new_leader_id,
            },
            LeaveOutcome::Deleted => LeaveResultDto::Deleted,
        }
    }
}
