use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub email: String,
    pub password: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub last_name: Option<String>,
    pub age: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub gender: Option<String>,
    pub subscription_date: DateTime,
    pub is_active: bool,
}

// Favorites reference users by id only; there is no foreign key so that
// deleting a user leaves its favorite rows in place.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
