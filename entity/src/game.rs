use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub image_url: Option<String>,
    pub default_max_participants: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_post::Entity")]
    GamePost,
}

impl Related<super::game_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
