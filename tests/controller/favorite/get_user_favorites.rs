use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use pokedex::{
    model::favorite::UserFavoritesDto,
    server::controller::{extract::IdPath, favorite::get_user_favorites},
};

use super::*;

/// Expect 200 with the user and both favorite lists
#[tokio::test]
async fn returns_user_and_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokemon("Pikachu")
        .with_mock_pokeball("Poke Ball")
        .with_favorite_pokemon(1, 1)
        .with_favorite_pokeball(1, 1)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.into_app_state()), IdPath(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: UserFavoritesDto = body_json(resp).await;
    assert_eq!(favorites.user.id, 1);
    assert_eq!(favorites.favorite_pokemons.len(), 1);
    assert_eq!(favorites.favorite_pokeballs.len(), 1);

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = get_user_favorites(State(test.into_app_state()), IdPath(1)).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
