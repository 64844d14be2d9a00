use crate::server::data::favorite::pokemon::FavoritePokemonRepository;

use super::*;

/// Expect confirmation message and the user gone
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let user_service = UserService::new(&test.db);
    let message = user_service.delete_user(1).await.unwrap();

    assert_eq!(message.message, "User deleted");
    assert!(user_service.get_user(1).await.is_err());

    Ok(())
}

/// Expect favorite rows referencing the user to survive its deletion
#[tokio::test]
async fn keeps_favorites_of_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokemon("Pikachu")
        .with_favorite_pokemon(1, 1)
        .build()
        .await?;

    let user_service = UserService::new(&test.db);
    user_service.delete_user(1).await.unwrap();

    let favorites = FavoritePokemonRepository::new(&test.db)
        .get_by_user_id(1)
        .await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

/// Expect UserNotFound when deleting a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(1).await;

    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::UserNotFound(1)))
    ));

    Ok(())
}
