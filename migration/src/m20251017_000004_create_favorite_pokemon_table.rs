use sea_orm_migration::{prelude::*, schema::*};

static IDX_FAVORITE_POKEMON_USER_POKEMON: &str = "idx_favorite_pokemon_user_id_pokemon_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePokemon::Id))
                    .col(integer(FavoritePokemon::UserId))
                    .col(integer(FavoritePokemon::PokemonId))
                    .to_owned(),
            )
            .await?;

        // No foreign keys: favorites outlive the user or pokemon they point at.
        // The unique pair index also serves lookups by user_id.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_POKEMON_USER_POKEMON)
                    .table(FavoritePokemon::Table)
                    .col(FavoritePokemon::UserId)
                    .col(FavoritePokemon::PokemonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_POKEMON_USER_POKEMON)
                    .table(FavoritePokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePokemon {
    #[sea_orm(iden = "favorite_pokemons")]
    Table,
    Id,
    UserId,
    PokemonId,
}
