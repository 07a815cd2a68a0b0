use chrono::{Duration, Utc};

use crate::{
    model::game_post::{GamePostStatus, ParticipantType, WaitingStatus},
    server::{
        data::game_post::{
            participant::ParticipantRepository, waiting::WaitingRepository, GamePostRepository,
        },
        error::AppError,
        model::game_post::GamePostFilter,
    },
};
use test_utils::{builder::TestBuilder, factory};
