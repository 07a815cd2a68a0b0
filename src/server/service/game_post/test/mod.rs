use chrono::{Duration, Utc};

use crate::{
    model::game_post::{GamePostStatus, ParticipantType, WaitingStatus},
    server::{
        data::{
            game_post::{
                participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
            },
            notification::NotificationRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            game_post::{
                CreateGamePostParams, GamePost, GamePostFilter, JoinOutcome, LeaveOutcome,
                UpdateGamePostParams,
            },
            user::User,
        },
        service::game_post::GamePostService,
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{self, game_post::GamePostFactory, participant::create_waiting_at, user::UserFactory},
};

mod delete;
mod join;
mod list;
mod remove_participant;
mod start_complete;

fn user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}

async fn new_user(db: &DatabaseConnection) -> Result<User, AppError> {
    Ok(user(factory::create_user(db).await?))
}

async fn load_post(db: &DatabaseConnection, id: i32) -> Result<GamePost, AppError> {
    Ok(GamePostRepository::new(db).find_by_id(id).await?.unwrap())
}

fn create_params(game_id: i32) -> CreateGamePostParams {
    CreateGamePostParams {
        game_id,
        title: "Ranked duo queue".to_string(),
        description: "Gold and above".to_string(),
        max_participants: None,
        start_time: Utc::now() + Duration::hours(3),
    }
}
