use chrono::{DateTime, Utc};
use sea_orm::TransactionTrait;

use crate::{
    model::game_post::WaitingStatus,
    server::{
        data::{
            game_post::{
                participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
            },
            user::UserRepository,
        },
        error::AppError,
        model::{
            game_post::{
                free_slots, next_leader, waiting_position, JoinOutcome, LeaveOutcome,
                WaitingEntry, MAX_WAIT_MESSAGE_LENGTH,
            },
            user::User,
        },
        util::validate::require_length,
    },
};

use super::{lock_post, notify, require_recruiting, settle, GamePostService};

impl<'a> GamePostService<'a> {
    /// Joins the post, or queues the user as `WAITING` when it is full.
    ///
    /// A pending invitation is consumed by joining.
    ///
    /// # Returns
    /// - `Ok(JoinOutcome::Joined)` - The user took a free slot
    /// - `Ok(JoinOutcome::Waitlisted)` - The post is full; 1-based queue position
    /// - `Err(AppError::Conflict)` - Already in the post, or the post is not recruiting
    pub async fn join(&self, user: &User, game_post_id: i32) -> Result<JoinOutcome, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        require_recruiting(&post)?;

        let participant_repo = ParticipantRepository::new(&txn);
        let waiting_repo = WaitingRepository::new(&txn);

        let participants = participant_repo.get_by_game_post(post.id).await?;
        if participants.iter().any(|p| p.is_member(user.id)) {
            return Err(AppError::Conflict(
                "You are already participating in this game post".to_string(),
            ));
        }

        if let Some(entry) = waiting_repo.find_by_user(post.id, user.id).await? {
            if entry.status != WaitingStatus::Invited {
                return Err(AppError::Conflict(
                    "You are already on the waiting list of this game post".to_string(),
                ));
            }
            waiting_repo.delete(entry.id).await?;
        }

        let outcome = if free_slots(participants.len(), post.max_participants) > 0 {
            participant_repo.add_member(post.id, user.id, false).await?;
            settle(&txn, &post).await?;

            let name = UserRepository::new(&txn)
                .get_display_names(&[user.id])
                .await?
                .get(user.id);
            let leader_ids: Vec<i32> = participants
                .iter()
                .filter(|p| p.is_leader)
                .filter_map(|p| p.user_id)
                .collect();
            notify(
                &txn,
                &post,
                leader_ids,
                "New participant",
                format!("{} joined \"{}\".", name, post.title),
            )
            .await?;

            JoinOutcome::Joined
        } else {
            waiting_repo
                .create(post.id, user.id, WaitingStatus::Waiting, None, None)
                .await?;
            let waiting = waiting_repo.get_by_game_post(post.id).await?;
            let position = waiting_position(&waiting, user.id).unwrap_or(waiting.len() as u64);

            JoinOutcome::Waitlisted { position }
        };

        txn.commit().await?;

        tracing::debug!(
            "User {} joined game post {}: {:?}",
            user.id,
            game_post_id,
            outcome
        );

        Ok(outcome)
    }

    /// Queues the user as `TIME_WAITING`, available from `available_time`.
    ///
    /// These entries are never promoted automatically; the leader admits them with
    /// `accept_waiting`.
    pub async fn wait_until(
        &self,
        user: &User,
        game_post_id: i32,
        available_time: DateTime<Utc>,
        message: Option<String>,
    ) -> Result<WaitingEntry, AppError> {
        if available_time <= Utc::now() {
            return Err(AppError::BadRequest(
                "Available time must be in the future".to_string(),
            ));
        }
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(message) = &message {
            require_length("Message", message, 1, MAX_WAIT_MESSAGE_LENGTH)?;
        }

        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        require_recruiting(&post)?;

        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        let waiting_repo = WaitingRepository::new(&txn);
        if participants.iter().any(|p| p.is_member(user.id))
            || waiting_repo.find_by_user(post.id, user.id).await?.is_some()
        {
            return Err(AppError::Conflict(
                "You are already in this game post".to_string(),
            ));
        }

        let entry = waiting_repo
            .create(
                post.id,
                user.id,
                WaitingStatus::TimeWaiting,
                Some(available_time),
                message,
            )
            .await?;

        txn.commit().await?;

        Ok(entry)
    }

    /// Leaves the post or its waiting list.
    ///
    /// A participant leaving frees a slot for the waiting list. A leaving leader hands
    /// over to the earliest-joined member; when no member is left the post is deleted.
    ///
    /// # Returns
    /// - `Ok(LeaveOutcome)` - What happened to the post
    /// - `Err(AppError::NotFound)` - The user is not in the post
    /// - `Err(AppError::Conflict)` - A participant tried to leave a post that already started
    pub async fn leave(&self, user: &User, game_post_id: i32) -> Result<LeaveOutcome, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;

        let waiting_repo = WaitingRepository::new(&txn);
        if let Some(entry) = waiting_repo.find_by_user(post.id, user.id).await? {
            waiting_repo.delete(entry.id).await?;
            txn.commit().await?;

            return Ok(LeaveOutcome::LeftWaitingList);
        }

        let participant_repo = ParticipantRepository::new(&txn);
        let participants = participant_repo.get_by_game_post(post.id).await?;
        let Some(leaver) = participants.iter().find(|p| p.is_member(user.id)) else {
            return Err(AppError::NotFound(
                "You are not part of this game post".to_string(),
            ));
        };
        require_recruiting(&post)?;

        participant_repo.delete(leaver.id).await?;
        let promoted_user_ids = settle(&txn, &post).await?;

        let remaining = participant_repo.get_by_game_post(post.id).await?;
        let Some(heir) = next_leader(&remaining) else {
            GamePostRepository::new(&txn).delete(post.id).await?;
            txn.commit().await?;

            tracing::info!(
                "Game post {} deleted after its last member left",
                game_post_id
            );
            return Ok(LeaveOutcome::Deleted);
        };

        let mut new_leader_id = None;
        if leaver.is_leader {
            participant_repo.set_leader(post.id, heir.id).await?;
            new_leader_id = heir.user_id;

            if let Some(heir_id) = heir.user_id {
                notify(
                    &txn,
                    &post,
                    vec![heir_id],
                    "You are the new leader",
                    format!("The leader left \"{}\" and you now lead it.", post.title),
                )
                .await?;
            }
        }

        txn.commit().await?;

        Ok(LeaveOutcome::Left {
            promoted_user_ids,
            new_leader_id,
        })
    }

    /// Accepts a pending invitation, taking a free slot.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No invitation for this user
    /// - `Err(AppError::Conflict)` - The post is full or not recruiting
    pub async fn accept_invite(&self, user: &User, game_post_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        require_recruiting(&post)?;

        let waiting_repo = WaitingRepository::new(&txn);
        let entry = find_invitation(&waiting_repo, post.id, user.id).await?;

        let participant_repo = ParticipantRepository::new(&txn);
        let count = participant_repo.get_by_game_post(post.id).await?.len();
        if free_slots(count, post.max_participants) == 0 {
            return Err(AppError::Conflict("The game post is full".to_string()));
        }

        waiting_repo.delete(entry.id).await?;
        participant_repo.add_member(post.id, user.id, false).await?;
        settle(&txn, &post).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Declines a pending invitation, removing it.
    pub async fn decline_invite(&self, user: &User, game_post_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;

        let waiting_repo = WaitingRepository::new(&txn);
        let entry = find_invitation(&waiting_repo, post.id, user.id).await?;
        waiting_repo.delete(entry.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

async fn find_invitation<C: sea_orm::ConnectionTrait>(
    waiting_repo: &WaitingRepository<'_, C>,
    game_post_id: i32,
    user_id: i32,
) -> Result<WaitingEntry, AppError> {
    waiting_repo
        .find_by_user(game_post_id, user_id)
        .await?
        .filter(|entry| entry.status == WaitingStatus::Invited)
        .ok_or_else(|| AppError::NotFound("No invitation for this game post".to_string()))
}
