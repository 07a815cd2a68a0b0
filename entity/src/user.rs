use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Subject identifier issued by the OAuth provider.
    #[sea_orm(unique)]
    pub oauth_id: String,
    pub name: String,
    pub email: Option<String>,
    /// One of `NONE`, `USER`, `ADMIN`, `SUPER_ADMIN`.
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profile::Entity")]
    UserProfile,
    #[sea_orm(has_one = "super::notification_setting::Entity")]
    NotificationSetting,
    #[sea_orm(has_many = "super::game_post::Entity")]
    GamePost,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::notification_setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationSetting.def()
    }
}

impl Related<super::game_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePost.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
