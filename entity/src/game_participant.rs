use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_post_id: i32,
    /// Set for `MEMBER` participants, empty for guests.
    pub user_id: Option<i32>,
    /// Set for `GUEST` participants.
    pub guest_name: Option<String>,
    /// One of `MEMBER`, `GUEST`.
    pub participant_type: String,
    pub is_leader: bool,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_post::Entity",
        from = "Column::GamePostId",
        to = "super::game_post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GamePost,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::game_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePost.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
