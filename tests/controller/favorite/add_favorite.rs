use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use pokedex::{
    model::{api::ErrorDto, favorite::FavoritePokemonDto},
    server::controller::{
        extract::IdPath,
        favorite::{add_favorite_pokeball, add_favorite_pokemon},
    },
};

use super::*;

/// Expect 201 with the join record
#[tokio::test]
async fn adds_favorite_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokemon("Pikachu")
        .build()
        .await?;

    let resp = add_favorite_pokemon(State(test.into_app_state()), IdPath((1, 1)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let favorite: FavoritePokemonDto = body_json(resp).await;
    assert_eq!(
        favorite,
        FavoritePokemonDto {
            id: 1,
            user_id: 1,
            pokemon_id: 1
        }
    );

    Ok(())
}

/// Expect 400 when the pokeball is already a favorite
#[tokio::test]
async fn rejects_duplicate_pokeball() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokeball("Poke Ball")
        .with_favorite_pokeball(1, 1)
        .build()
        .await?;

    let result = add_favorite_pokeball(State(test.into_app_state()), IdPath((1, 1))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Pokeball already in favorites");

    Ok(())
}

/// Expect 404 naming the missing pokemon
#[tokio::test]
async fn fails_for_nonexistent_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let result = add_favorite_pokemon(State(test.into_app_state()), IdPath((1, 1))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Pokemon not found");

    Ok(())
}
