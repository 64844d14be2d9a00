//! Favorites service layer.
//!
//! Links users to pokemon and pokeballs through the two favorite join tables. Existence of
//! the user and item is checked here since the join tables carry no foreign keys.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        api::MessageDto,
        favorite::{CollectibleDto, FavoriteDto, UserFavoritesDto},
    },
    server::{
        data::{
            favorite::{pokeball::FavoritePokeballRepository, pokemon::FavoritePokemonRepository},
            pokeball::PokeballRepository,
            pokemon::PokemonRepository,
            user::UserRepository,
        },
        error::{entity::EntityError, favorite::FavoriteError, Error},
        model::{
            collectible::{CollectibleKind, NewCollectible},
            db::UserModel,
            input::{NewPokeball, NewPokemon},
        },
        service::is_unique_violation,
    },
};

/// Service for managing a user's favorite pokemon and pokeballs.
pub struct FavoriteService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    /// Creates a new instance of FavoriteService.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction reference. Writes that touch more than
    ///   one table are only atomic when this is a transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pokemon or pokeball and favorites it for the user.
    ///
    /// The join row is created unconditionally; the item is new so it cannot already be a
    /// favorite. Repeating the same request creates another item and another join row.
    ///
    /// # Returns
    /// - `Ok(CollectibleDto)` - The newly created item
    /// - `Err(Error::EntityError)` - No user with this ID, checked before validation
    /// - `Err(Error::ValidationError)` - A required item field is missing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_item_and_favorite(
        &self,
        user_id: i32,
        new_item: NewCollectible,
    ) -> Result<CollectibleDto, Error> {
        self.require_user(user_id).await?;

        let item = match new_item {
            NewCollectible::Pokemon(payload) => {
                let new_pokemon = NewPokemon::try_from(payload)?;
                let pokemon = PokemonRepository::new(self.db).create(new_pokemon).await?;
                FavoritePokemonRepository::new(self.db)
                    .create(user_id, pokemon.id)
                    .await?;

                tracing::info!(
                    "Created pokemon ID {} as favorite of user ID {}",
                    pokemon.id,
                    user_id
                );

                CollectibleDto::Pokemon(pokemon.into())
            }
            NewCollectible::Pokeball(payload) => {
                let new_pokeball = NewPokeball::try_from(payload)?;
                let pokeball = PokeballRepository::new(self.db)
                    .create(new_pokeball)
                    .await?;
                FavoritePokeballRepository::new(self.db)
                    .create(user_id, pokeball.id)
                    .await?;

                tracing::info!(
                    "Created pokeball ID {} as favorite of user ID {}",
                    pokeball.id,
                    user_id
                );

                CollectibleDto::Pokeball(pokeball.into())
            }
        };

        Ok(item)
    }

    /// Favorites an existing pokemon or pokeball for the user.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created join record
    /// - `Err(Error::EntityError)` - The user or the item does not exist
    /// - `Err(Error::FavoriteError)` - The pair is already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: CollectibleKind,
        item_id: i32,
    ) -> Result<FavoriteDto, Error> {
        self.require_user(user_id).await?;

        let item_exists = match kind {
            CollectibleKind::Pokemon => PokemonRepository::new(self.db)
                .get(item_id)
                .await?
                .is_some(),
            CollectibleKind::Pokeball => PokeballRepository::new(self.db)
                .get(item_id)
                .await?
                .is_some(),
        };
        if !item_exists {
            return Err(kind.not_found(item_id).into());
        }

        let already_favorite = FavoriteError::AlreadyFavorite {
            kind,
            user_id,
            item_id,
        };

        let favorite = match kind {
            CollectibleKind::Pokemon => {
                let favorite_repo = FavoritePokemonRepository::new(self.db);
                if favorite_repo.find(user_id, item_id).await?.is_some() {
                    return Err(already_favorite.into());
                }

                let favorite = favorite_repo
                    .create(user_id, item_id)
                    .await
                    .map_err(|e| unique_as(e, already_favorite))?;

                FavoriteDto::Pokemon(favorite.into())
            }
            CollectibleKind::Pokeball => {
                let favorite_repo = FavoritePokeballRepository::new(self.db);
                if favorite_repo.find(user_id, item_id).await?.is_some() {
                    return Err(already_favorite.into());
                }

                let favorite = favorite_repo
                    .create(user_id, item_id)
                    .await
                    .map_err(|e| unique_as(e, already_favorite))?;

                FavoriteDto::Pokeball(favorite.into())
            }
        };

        tracing::info!("Added favorite {} ID {} for user ID {}", kind, item_id, user_id);

        Ok(favorite)
    }

    /// Removes the favorite linking the user to the item.
    ///
    /// Neither the user nor the item needs to still exist, only the join row.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - "Favorite <Kind> removed"
    /// - `Err(Error::FavoriteError)` - No favorite for this pair
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: CollectibleKind,
        item_id: i32,
    ) -> Result<MessageDto, Error> {
        let not_found = FavoriteError::FavoriteNotFound {
            kind,
            user_id,
            item_id,
        };

        match kind {
            CollectibleKind::Pokemon => {
                let favorite_repo = FavoritePokemonRepository::new(self.db);
                let favorite = favorite_repo
                    .find(user_id, item_id)
                    .await?
                    .ok_or(not_found)?;
                favorite_repo.delete(favorite.id).await?;
            }
            CollectibleKind::Pokeball => {
                let favorite_repo = FavoritePokeballRepository::new(self.db);
                let favorite = favorite_repo
                    .find(user_id, item_id)
                    .await?
                    .ok_or(not_found)?;
                favorite_repo.delete(favorite.id).await?;
            }
        }

        tracing::info!(
            "Removed favorite {} ID {} for user ID {}",
            kind,
            item_id,
            user_id
        );

        Ok(MessageDto::new(format!("Favorite {} removed", kind)))
    }

    /// Retrieves the user with every favorite pokemon and pokeball row, ordered by ID.
    ///
    /// Rows whose item has since been deleted are returned as stored.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - User and favorites
    /// - `Err(Error::EntityError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user = self.require_user(user_id).await?;

        let favorite_pokemons = FavoritePokemonRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;
        let favorite_pokeballs = FavoritePokeballRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            user: user.into(),
            favorite_pokemons: favorite_pokemons.into_iter().map(Into::into).collect(),
            favorite_pokeballs: favorite_pokeballs.into_iter().map(Into::into).collect(),
        })
    }

    async fn require_user(&self, user_id: i32) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(EntityError::UserNotFound(user_id))?;

        Ok(user)
    }
}

/// Reports a unique index violation as `err`, anything else as a database error.
fn unique_as(db_err: sea_orm::DbErr, err: FavoriteError) -> Error {
    match is_unique_violation(&db_err) {
        true => err.into(),
        false => db_err.into(),
    }
}
