use sea_orm::TransactionTrait;

use crate::{
    model::game_post::{GamePostStatus, ParticipantType, WaitingStatus},
    server::{
        data::{
            game_post::{participant::ParticipantRepository, waiting::WaitingRepository},
            user::UserRepository,
        },
        error::AppError,
        model::{
            game_post::{free_slots, Participant, WaitingEntry, MAX_GUEST_NAME_LENGTH},
            user::User,
        },
        util::validate::require_length,
    },
};

use super::{lock_post, notify, require_leader, require_recruiting, settle, GamePostService};

impl<'a> GamePostService<'a> {
    /// Invites a user; the invitation waits on the waiting list as `INVITED`.
    ///
    /// # Returns
    /// - `Ok(WaitingEntry)` - The invitation
    /// - `Err(AppError::NotFound)` - The target user does not exist
    /// - `Err(AppError::Conflict)` - The target is already in the post
    pub async fn invite(
        &self,
        actor: &User,
        game_post_id: i32,
        target_user_id: i32,
    ) -> Result<WaitingEntry, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        require_leader(actor, &participants)?;
        require_recruiting(&post)?;

        if UserRepository::new(&txn)
            .find_by_id(target_user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let waiting_repo = WaitingRepository::new(&txn);
        if participants.iter().any(|p| p.is_member(target_user_id))
            || waiting_repo
                .find_by_user(post.id, target_user_id)
                .await?
                .is_some()
        {
            return Err(AppError::Conflict(
                "The user is already in this game post".to_string(),
            ));
        }

        let entry = waiting_repo
            .create(post.id, target_user_id, WaitingStatus::Invited, None, None)
            .await?;
        notify(
            &txn,
            &post,
            vec![target_user_id],
            "Game invitation",
            format!("You were invited to join \"{}\".", post.title),
        )
        .await?;

        txn.commit().await?;

        Ok(entry)
    }

    /// Admits a waiting list entry of any status into a free slot.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such entry on this post
    /// - `Err(AppError::Conflict)` - No free slot
    pub async fn accept_waiting(
        &self,
        actor: &User,
        game_post_id: i32,
        waiting_id: i32,
    ) -> Result<Participant, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participant_repo = ParticipantRepository::new(&txn);
        let participants = participant_repo.get_by_game_post(post.id).await?;
        require_leader(actor, &participants)?;
        require_recruiting(&post)?;

        let waiting_repo = WaitingRepository::new(&txn);
        let entry = waiting_repo
            .get_by_game_post(post.id)
            .await?
            .into_iter()
            .find(|w| w.id == waiting_id)
            .ok_or_else(|| AppError::NotFound("Waiting entry not found".to_string()))?;

        if free_slots(participants.len(), post.max_participants) == 0 {
            return Err(AppError::Conflict("The game post is full".to_string()));
        }

        waiting_repo.delete(entry.id).await?;
        let participant = participant_repo
            .add_member(post.id, entry.user_id, false)
            .await?;
        settle(&txn, &post).await?;
        notify(
            &txn,
            &post,
            vec![entry.user_id],
            "You're in!",
            format!("The leader accepted you into \"{}\".", post.title),
        )
        .await?;

        txn.commit().await?;

        Ok(participant)
    }

    /// Adds a named guest without an account into a free slot.
    pub async fn add_guest(
        &self,
        actor: &User,
        game_post_id: i32,
        name: String,
    ) -> Result<Participant, AppError> {
        let name = name.trim().to_string();
        require_length("Guest name", &name, 1, MAX_GUEST_NAME_LENGTH)?;

        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participant_repo = ParticipantRepository::new(&txn);
        let participants = participant_repo.get_by_game_post(post.id).await?;
        require_leader(actor, &participants)?;
        require_recruiting(&post)?;

        if free_slots(participants.len(), post.max_participants) == 0 {
            return Err(AppError::Conflict("The game post is full".to_string()));
        }

        let guest = participant_repo.add_guest(post.id, name).await?;
        settle(&txn, &post).await?;

        txn.commit().await?;

        Ok(guest)
    }

    /// Removes a member or guest, then fills the freed slot from the waiting list.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The participant is the leader
    /// - `Err(AppError::NotFound)` - No such participant on this post
    pub async fn remove_participant(
        &self,
        actor: &User,
        game_post_id: i32,
        participant_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participant_repo = ParticipantRepository::new(&txn);
        let participants = participant_repo.get_by_game_post(post.id).await?;
        require_leader(actor, &participants)?;
        require_recruiting(&post)?;

        let target = participants
            .iter()
            .find(|p| p.id == participant_id)
            .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;
        if target.is_leader {
            return Err(AppError::BadRequest(
                "The leader cannot be removed; transfer leadership or leave instead".to_string(),
            ));
        }

        participant_repo.delete(target.id).await?;
        if let Some(user_id) = target.user_id {
            notify(
                &txn,
                &post,
                vec![user_id],
                "Removed from game",
                format!("You were removed from \"{}\".", post.title),
            )
            .await?;
        }
        settle(&txn, &post).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Hands leadership to another member of the post.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The target is not a member participant
    /// - `Err(AppError::Conflict)` - The post is completed
    pub async fn transfer_leader(
        &self,
        actor: &User,
        game_post_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participant_repo = ParticipantRepository::new(&txn);
        let participants = participant_repo.get_by_game_post(post.id).await?;
        require_leader(actor, &participants)?;

        if post.status == GamePostStatus::Completed {
            return Err(AppError::Conflict(
                "Leadership of a completed game post cannot change".to_string(),
            ));
        }

        let target = participants
            .iter()
            .find(|p| p.participant_type == ParticipantType::Member && p.user_id == Some(user_id))
            .ok_or_else(|| {
                AppError::BadRequest("The new leader must be a member of the game post".to_string())
            })?;

        if !target.is_leader {
            participant_repo.set_leader(post.id, target.id).await?;
            notify(
                &txn,
                &post,
                vec![user_id],
                "You are the new leader",
                format!("You now lead \"{}\".", post.title),
            )
            .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Leadership of game post {} transferred to user {}",
            game_post_id,
            user_id
        );

        Ok(())
    }
}
