use chrono::{DateTime, Duration, Utc};
use sea_orm::TransactionTrait;

use crate::{
    model::game_post::GamePostStatus,
    server::{
        data::game_post::{
            participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
        },
        error::AppError,
        model::game_post::AUTO_COMPLETE_AFTER_HOURS,
    },
};

use super::{lock_post, member_ids, notify, GamePostService};

/// Posts moved by one [`GamePostService::advance`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdvanceSummary {
    pub started: Vec<i32>,
    pub completed: Vec<i32>,
}

impl<'a> GamePostService<'a> {
    /// Starts recruiting posts whose start time has passed and completes posts that
    /// have been in progress for [`AUTO_COMPLETE_AFTER_HOURS`].
    ///
    /// Each post is advanced in its own transaction. A post that fails is logged and
    /// skipped so one bad row does not hold back the rest.
    pub async fn advance(&self, now: DateTime<Utc>) -> Result<AdvanceSummary, AppError> {
        let post_repo = GamePostRepository::new(self.db);
        let mut summary = AdvanceSummary::default();

        for id in post_repo.get_due_to_start(now).await? {
            match self.auto_start(id, now).await {
                Ok(true) => summary.started.push(id),
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to start game post {}: {}", id, e),
            }
        }

        let started_before = now - Duration::hours(AUTO_COMPLETE_AFTER_HOURS);
        for id in post_repo.get_due_to_complete(started_before).await? {
            match self.auto_complete(id).await {
                Ok(true) => summary.completed.push(id),
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to complete game post {}: {}", id, e),
            }
        }

        Ok(summary)
    }

    async fn auto_start(&self, game_post_id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        // Re-checked under the lock; the leader may have started or moved it meanwhile.
        if !post.status.can_transition_to(GamePostStatus::InProgress) || post.start_time > now {
            return Ok(false);
        }

        GamePostRepository::new(&txn)
            .set_status(post.id, GamePostStatus::InProgress)
            .await?;
        WaitingRepository::new(&txn)
            .delete_by_game_post(post.id)
            .await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        notify(
            &txn,
            &post,
            member_ids(&participants, None),
            "Game started",
            format!("\"{}\" has started.", post.title),
        )
        .await?;

        txn.commit().await?;

        Ok(true)
    }

    async fn auto_complete(&self, game_post_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        if !post.status.can_transition_to(GamePostStatus::Completed) {
            return Ok(false);
        }

        GamePostRepository::new(&txn)
            .set_status(post.id, GamePostStatus::Completed)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
