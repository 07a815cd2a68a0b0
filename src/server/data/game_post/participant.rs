//! Participant repository for the `game_participant` table.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::game_post::ParticipantType,
    server::{
        error::AppError,
        model::game_post::{sort_participants, Participant},
    },
};

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Participants of a post, leader first then by join order.
    pub async fn get_by_game_post(&self, game_post_id: i32) -> Result<Vec<Participant>, AppError> {
        let mut participants = entity::prelude::GameParticipant::find()
            .filter(entity::game_participant::Column::GamePostId.eq(game_post_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        sort_participants(&mut participants);

        Ok(participants)
    }

    /// Participants of several posts in one query, ordered by post then join order.
    pub async fn get_by_game_posts(&self, game_post_ids: &[i32]) -> Result<Vec<Participant>, AppError> {
        if game_post_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GameParticipant::find()
            .filter(entity::game_participant::Column::GamePostId.is_in(game_post_ids.to_vec()))
            .order_by_asc(entity::game_participant::Column::GamePostId)
            .order_by_asc(entity::game_participant::Column::JoinedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect()
    }

    pub async fn add_member(
        &self,
        game_post_id: i32,
        user_id: i32,
        is_leader: bool,
    ) -> Result<Participant, AppError> {
        let entity = entity::game_participant::ActiveModel {
            game_post_id: ActiveValue::Set(game_post_id),
            user_id: ActiveValue::Set(Some(user_id)),
            guest_name: ActiveValue::Set(None),
            participant_type: ActiveValue::Set(ParticipantType::Member.as_str().to_string()),
            is_leader: ActiveValue::Set(is_leader),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Participant::from_entity(entity)
    }

    pub async fn add_guest(&self, game_post_id: i32, name: String) -> Result<Participant, AppError> {
        let entity = entity::game_participant::ActiveModel {
            game_post_id: ActiveValue::Set(game_post_id),
            user_id: ActiveValue::Set(None),
            guest_name: ActiveValue::Set(Some(name)),
            participant_type: ActiveValue::Set(ParticipantType::Guest.as_str().to_string()),
            is_leader: ActiveValue::Set(false),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Participant::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::GameParticipant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Makes `participant_id` the only leader of the post.
    pub async fn set_leader(&self, game_post_id: i32, participant_id: i32) -> Result<(), AppError> {
        entity::prelude::GameParticipant::update_many()
            .col_expr(entity::game_participant::Column::IsLeader, Expr::value(false))
            .filter(entity::game_participant::Column::GamePostId.eq(game_post_id))
            .filter(entity::game_participant::Column::Id.ne(participant_id))
            .exec(self.db)
            .await?;

        entity::prelude::GameParticipant::update_many()
            .col_expr(entity::game_participant::Column::IsLeader, Expr::value(true))
            .filter(entity::game_participant::Column::Id.eq(participant_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
