use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `GAME_POST`, `NOTICE`, `COMMENT`, `SYSTEM`.
    pub category: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub link: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification_receipt::Entity")]
    NotificationReceipt,
}

impl Related<super::notification_receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationReceipt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
