use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokeball::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokeball::Id))
                    .col(string_len(Pokeball::Name, 100))
                    .col(text_null(Pokeball::Effect))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pokeball::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pokeball {
    #[sea_orm(iden = "pokeballs")]
    Table,
    Id,
    Name,
    Effect,
}
