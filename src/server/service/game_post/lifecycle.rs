use std::collections::HashMap;

use chrono::Utc;
use sea_orm::TransactionTrait;

use crate::{
    model::game_post::GamePostStatus,
    server::{
        data::{
            game::GameRepository,
            game_post::{
                participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
            },
            user::UserRepository,
        },
        error::AppError,
        model::{
            game_post::{
                CreateGamePostParams, GamePostDetail, GamePostFilter, GamePostSummary,
                PaginatedGamePosts, UpdateGamePostParams, MAX_DESCRIPTION_LENGTH,
                MAX_PARTICIPANTS, MAX_TITLE_LENGTH, MIN_PARTICIPANTS,
            },
            user::User,
        },
        util::validate::{require_length, require_range},
    },
};

use super::{
    lock_post, member_ids, notify, require_leader, require_recruiting, settle, GamePostService,
};

impl<'a> GamePostService<'a> {
    /// Creates an `OPEN` game post led by its author.
    ///
    /// `max_participants` falls back to the game's default.
    ///
    /// # Returns
    /// - `Ok(GamePostDetail)` - The new post with the author as leader
    /// - `Err(AppError::BadRequest)` - Invalid fields or a start time in the past
    /// - `Err(AppError::NotFound)` - The game does not exist
    pub async fn create(
        &self,
        author: &User,
        params: CreateGamePostParams,
    ) -> Result<GamePostDetail, AppError> {
        require_length("Title", &params.title, 1, MAX_TITLE_LENGTH)?;
        require_length("Description", &params.description, 0, MAX_DESCRIPTION_LENGTH)?;
        if params.start_time <= Utc::now() {
            return Err(AppError::BadRequest(
                "Start time must be in the future".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let game = GameRepository::new(&txn)
            .find_by_id(params.game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

        let max_participants = params
            .max_participants
            .unwrap_or(game.default_max_participants);
        require_range(
            "Max participants",
            max_participants,
            MIN_PARTICIPANTS,
            MAX_PARTICIPANTS,
        )?;

        let post = GamePostRepository::new(&txn)
            .create(author.id, max_participants, params)
            .await?;
        ParticipantRepository::new(&txn)
            .add_member(post.id, author.id, true)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} created game post {} for {}",
            author.id,
            post.id,
            game.name
        );

        self.get(post.id).await
    }

    /// Lists game posts, earliest start first, with their head counts and leader.
    pub async fn list(&self, filter: GamePostFilter) -> Result<PaginatedGamePosts, AppError> {
        let (posts, total, total_pages) =
            GamePostRepository::new(self.db).get_paginated(&filter).await?;

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let mut game_ids: Vec<i32> = posts.iter().map(|p| p.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();

        let game_names: HashMap<i32, String> = GameRepository::new(self.db)
            .get_by_ids(&game_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect();
        let participants = ParticipantRepository::new(self.db)
            .get_by_game_posts(&post_ids)
            .await?;
        let waiting = WaitingRepository::new(self.db)
            .get_by_game_posts(&post_ids)
            .await?;

        let leader_ids: Vec<i32> = participants
            .iter()
            .filter(|p| p.is_leader)
            .filter_map(|p| p.user_id)
            .collect();
        let names = UserRepository::new(self.db)
            .get_display_names(&leader_ids)
            .await?;

        let game_posts = posts
            .into_iter()
            .map(|post| {
                let roster: Vec<_> = participants
                    .iter()
                    .filter(|p| p.game_post_id == post.id)
                    .collect();
                let leader_name = roster
                    .iter()
                    .find(|p| p.is_leader)
                    .and_then(|p| p.user_id)
                    .map(|id| names.get(id));
                let waiting_count = waiting.iter().filter(|w| w.game_post_id == post.id).count();

                GamePostSummary {
                    game_name: game_names.get(&post.game_id).cloned().unwrap_or_default(),
                    leader_name,
                    participant_count: roster.len() as u64,
                    waiting_count: waiting_count as u64,
                    post,
                }
            })
            .collect();

        Ok(PaginatedGamePosts {
            game_posts,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages,
        })
    }

    /// Gets a post with its roster (leader first, then join order) and waiting list
    /// (arrival order).
    pub async fn get(&self, game_post_id: i32) -> Result<GamePostDetail, AppError> {
        let post = GamePostRepository::new(self.db)
            .find_by_id(game_post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game post not found".to_string()))?;

        let game_name = GameRepository::new(self.db)
            .find_by_id(post.game_id)
            .await?
            .map(|g| g.name)
            .unwrap_or_default();
        let participants = ParticipantRepository::new(self.db)
            .get_by_game_post(post.id)
            .await?;
        let waiting = WaitingRepository::new(self.db)
            .get_by_game_post(post.id)
            .await?;

        let mut user_ids: Vec<i32> = participants.iter().filter_map(|p| p.user_id).collect();
        user_ids.extend(waiting.iter().map(|w| w.user_id));
        let names = UserRepository::new(self.db)
            .get_display_names(&user_ids)
            .await?;

        Ok(GamePostDetail {
            post,
            game_name,
            participants,
            waiting,
            names,
        })
    }

    /// Edits a recruiting post. Growing the capacity promotes waiting users.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Invalid fields, or a capacity below the current roster
    /// - `Err(AppError::Conflict)` - The post is no longer recruiting
    pub async fn update(
        &self,
        actor: &User,
        game_post_id: i32,
        params: UpdateGamePostParams,
    ) -> Result<GamePostDetail, AppError> {
        if let Some(title) = &params.title {
            require_length("Title", title, 1, MAX_TITLE_LENGTH)?;
        }
        if let Some(description) = &params.description {
            require_length("Description", description, 0, MAX_DESCRIPTION_LENGTH)?;
        }
        if let Some(max) = params.max_participants {
            require_range("Max participants", max, MIN_PARTICIPANTS, MAX_PARTICIPANTS)?;
        }
        if params.start_time.is_some_and(|start| start <= Utc::now()) {
            return Err(AppError::BadRequest(
                "Start time must be in the future".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        require_leader(actor, &participants)?;
        require_recruiting(&post)?;

        if let Some(max) = params.max_participants {
            if (max as usize) < participants.len() {
                return Err(AppError::BadRequest(format!(
                    "Max participants cannot be lower than the current {} participants",
                    participants.len()
                )));
            }
        }

        let post_repo = GamePostRepository::new(&txn);
        post_repo.update(post.id, params).await?;
        let post = post_repo
            .find_by_id(post.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game post not found".to_string()))?;
        settle(&txn, &post).await?;

        txn.commit().await?;

        self.get(game_post_id).await
    }

    /// Moves a recruiting post to `IN_PROGRESS` and clears its waiting list.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - The post already started or finished
    pub async fn start(&self, actor: &User, game_post_id: i32) -> Result<GamePostDetail, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        require_leader(actor, &participants)?;

        if !post.status.can_transition_to(GamePostStatus::InProgress) {
            return Err(AppError::Conflict(format!(
                "A {} game post cannot be started",
                post.status.as_str()
            )));
        }

        GamePostRepository::new(&txn)
            .set_status(post.id, GamePostStatus::InProgress)
            .await?;
        WaitingRepository::new(&txn)
            .delete_by_game_post(post.id)
            .await?;
        notify(
            &txn,
            &post,
            member_ids(&participants, Some(actor.id)),
            "Game started",
            format!("\"{}\" has started.", post.title),
        )
        .await?;

        txn.commit().await?;

        tracing::info!("Game post {} started by user {}", post.id, actor.id);

        self.get(game_post_id).await
    }

    /// # Returns
    /// - `Err(AppError::Conflict)` - The post is not in progress
    pub async fn complete(
        &self,
        actor: &User,
        game_post_id: i32,
    ) -> Result<GamePostDetail, AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        require_leader(actor, &participants)?;

        if !post.status.can_transition_to(GamePostStatus::Completed) {
            return Err(AppError::Conflict(format!(
                "A {} game post cannot be completed",
                post.status.as_str()
            )));
        }

        GamePostRepository::new(&txn)
            .set_status(post.id, GamePostStatus::Completed)
            .await?;

        txn.commit().await?;

        self.get(game_post_id).await
    }

    /// Deletes the post with its roster and waiting list; other members are notified.
    pub async fn delete(&self, actor: &User, game_post_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let post = lock_post(&txn, game_post_id).await?;
        let participants = ParticipantRepository::new(&txn)
            .get_by_game_post(post.id)
            .await?;
        require_leader(actor, &participants)?;

        if post.status != GamePostStatus::Completed {
            notify(
                &txn,
                &post,
                member_ids(&participants, Some(actor.id)),
                "Game cancelled",
                format!("\"{}\" was cancelled.", post.title),
            )
            .await?;
        }
        GamePostRepository::new(&txn).delete(post.id).await?;

        txn.commit().await?;

        tracing::info!("Game post {} deleted by user {}", post.id, actor.id);

        Ok(())
    }
}
