//! Game post recruitment service.
//!
//! Every operation that changes a roster runs in one transaction that starts with
//! [`GamePostRepository::lock_for_update`], so two users racing for the last slot are
//! applied one after another. The pure rules (status derivation, promotion order, leader
//! succession) live in `server::model::game_post`; this module applies them.
//!
//! Operations are split by who performs them:
//! - `lifecycle` - create, list, get, update, start, complete, delete
//! - `roster` - join, wait, leave and invitations answered by the invited user
//! - `leader` - roster changes only the leader (or an admin) may make
//! - `schedule` - the periodic status advance

mod leader;
mod lifecycle;
mod roster;
mod schedule;

pub use schedule::AdvanceSummary;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::notification::NotificationCategory,
    server::{
        data::game_post::{
            participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            game_post::{free_slots, next_promotions, GamePost, Participant},
            notification::DispatchNotificationParams,
            user::User,
        },
        service::notification::NotificationService,
    },
};

pub struct GamePostService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GamePostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Locks the post for the rest of the transaction.
async fn lock_post<C: ConnectionTrait>(db: &C, game_post_id: i32) -> Result<GamePost, AppError> {
    GamePostRepository::new(db)
        .lock_for_update(game_post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game post not found".to_string()))
}

fn require_recruiting(post: &GamePost) -> Result<(), AppError> {
    if !post.status.accepts_members() {
        return Err(AppError::Conflict(format!(
            "The game post is {} and no longer accepts roster changes",
            post.status.as_str()
        )));
    }

    Ok(())
}

/// Checks that `actor` leads the post or is an admin.
fn require_leader(actor: &User, participants: &[Participant]) -> Result<(), AppError> {
    let is_leader = participants
        .iter()
        .any(|p| p.is_leader && p.user_id == Some(actor.id));

    if !is_leader && !actor.is_admin() {
        return Err(AuthError::AccessDenied(
            actor.id,
            "User is not the leader of the game post".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Promotes waiting users into free slots and stores the derived status.
///
/// Must run after every change to the roster or the capacity. Promotion only happens
/// while the post is recruiting; promoted users are notified.
///
/// # Returns
/// - `Ok(Vec<i32>)` - IDs of the promoted users, oldest entry first
async fn settle<C: ConnectionTrait>(db: &C, post: &GamePost) -> Result<Vec<i32>, AppError> {
    let participant_repo = ParticipantRepository::new(db);
    let waiting_repo = WaitingRepository::new(db);

    let mut count = participant_repo.get_by_game_post(post.id).await?.len();
    let mut promoted = Vec::new();

    if post.status.accepts_members() {
        let waiting = waiting_repo.get_by_game_post(post.id).await?;
        for entry in next_promotions(&waiting, free_slots(count, post.max_participants)) {
            participant_repo
                .add_member(post.id, entry.user_id, false)
                .await?;
            waiting_repo.delete(entry.id).await?;
            promoted.push(entry.user_id);
        }
        count += promoted.len();
    }

    let status = post.status.derived(count, post.max_participants);
    if status != post.status {
        GamePostRepository::new(db).set_status(post.id, status).await?;
    }

    if !promoted.is_empty() {
        tracing::info!(
            "Promoted {} waiting user(s) into game post {}",
            promoted.len(),
            post.id
        );
        notify(
            db,
            post,
            promoted.clone(),
            "You're in!",
            format!("A slot opened up in \"{}\" and you have joined.", post.title),
        )
        .await?;
    }

    Ok(promoted)
}

async fn notify<C: ConnectionTrait>(
    db: &C,
    post: &GamePost,
    recipients: Vec<i32>,
    title: &str,
    body: String,
) -> Result<(), AppError> {
    if recipients.is_empty() {
        return Ok(());
    }

    NotificationService::new(db)
        .dispatch(DispatchNotificationParams {
            category: NotificationCategory::GamePost,
            title: title.to_string(),
            body,
            link: Some(format!("/game-posts/{}", post.id)),
            recipients,
        })
        .await?;

    Ok(())
}

/// User IDs of every member except `except`.
fn member_ids(participants: &[Participant], except: Option<i32>) -> Vec<i32> {
    participants
        .iter()
        .filter_map(|p| p.user_id)
        .filter(|&id| Some(id) != except)
        .collect()
}

#[cfg(test)]
mod test;
