use sea_orm::entity::prelude::*;

/// Account table. Created at startup, not read or written by any route.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(64))", unique)]
    pub username: String,
    #[sea_orm(column_type = "String(Some(128))")]
    pub email: Option<String>,
    #[sea_orm(column_type = "String(Some(256))")]
    pub hashed_password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
