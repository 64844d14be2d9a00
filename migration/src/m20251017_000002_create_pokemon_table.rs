use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(string_len(Pokemon::Name, 100))
                    .col(string_len(Pokemon::PokemonType, 50))
                    .col(text_null(Pokemon::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    #[sea_orm(iden = "pokemons")]
    Table,
    Id,
    Name,
    #[sea_orm(iden = "type")]
    PokemonType,
    Description,
}
