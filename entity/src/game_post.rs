use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_id: i32,
    pub author_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub max_participants: i32,
    /// One of `OPEN`, `FULL`, `IN_PROGRESS`, `COMPLETED`.
    pub status: String,
    pub start_time: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::game_participant::Entity")]
    GameParticipant,
    #[sea_orm(has_many = "super::waiting_participant::Entity")]
    WaitingParticipant,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::game_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameParticipant.def()
    }
}

impl Related<super::waiting_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaitingParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
