use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Email, 120))
                    .col(string_null(User::Password))
                    .col(string_len(User::FirstName, 50))
                    .col(string_len_null(User::LastName, 50))
                    .col(integer_null(User::Age))
                    .col(string_len_null(User::Gender, 10))
                    .col(timestamp(User::SubscriptionDate))
                    .col(boolean(User::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Password,
    FirstName,
    LastName,
    Age,
    Gender,
    SubscriptionDate,
    IsActive,
}
