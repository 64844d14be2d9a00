use sea_orm_migration::{prelude::*, schema::*};

static IDX_FAVORITE_POKEBALL_USER_POKEBALL: &str = "idx_favorite_pokeball_user_id_pokeball_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePokeball::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePokeball::Id))
                    .col(integer(FavoritePokeball::UserId))
                    .col(integer(FavoritePokeball::PokeballId))
                    .to_owned(),
            )
            .await?;

        // No foreign keys: favorites outlive the user or pokeball they point at.
        // The unique pair index also serves lookups by user_id.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_POKEBALL_USER_POKEBALL)
                    .table(FavoritePokeball::Table)
                    .col(FavoritePokeball::UserId)
                    .col(FavoritePokeball::PokeballId)
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
                    .name(IDX_FAVORITE_POKEBALL_USER_POKEBALL)
                    .table(FavoritePokeball::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePokeball::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePokeball {
    #[sea_orm(iden = "favorite_pokeballs")]
    Table,
    Id,
    UserId,
    PokeballId,
}
