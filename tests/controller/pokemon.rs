//! Tests for the pokemon endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokedex::{
    model::{
        api::{ErrorDto, MessageDto},
        pokemon::{CreatePokemonDto, PokemonDto, UpdatePokemonDto},
    },
    server::controller::{
        extract::IdPath,
        pokemon::{create_pokemon, delete_pokemon, get_pokemon, list_pokemons, update_pokemon},
    },
};

use super::*;

/// Expect 201 with the created pokemon
#[tokio::test]
async fn create_pokemon_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let payload = CreatePokemonDto {
        name: Some("Charmander".to_string()),
        pokemon_type: Some("Fire".to_string()),
        description: Some("Lizard pokemon".to_string()),
    };
    let resp = create_pokemon(State(test.into_app_state()), Json(payload))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let pokemon: PokemonDto = body_json(resp).await;
    assert_eq!(pokemon.pokemon_type, "Fire");

    Ok(())
}

/// Expect 400 when the type is missing
#[tokio::test]
async fn create_pokemon_rejects_missing_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let payload = CreatePokemonDto {
        name: Some("Charmander".to_string()),
        ..Default::default()
    };
    let result = create_pokemon(State(test.into_app_state()), Json(payload)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Missing required field: type");

    Ok(())
}

/// Expect 200 with the list, then the single pokemon
#[tokio::test]
async fn list_and_get_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_pokemon("Pikachu")
        .with_mock_pokemon("Raichu")
        .build()
        .await?;

    let resp = list_pokemons(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    let pokemons: Vec<PokemonDto> = body_json(resp).await;
    assert_eq!(pokemons.len(), 2);

    let resp = get_pokemon(State(test.into_app_state()), IdPath(2))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let pokemon: PokemonDto = body_json(resp).await;
    assert_eq!(pokemon.name, "Raichu");

    Ok(())
}

/// Expect 404 when updating a pokemon that does not exist
#[tokio::test]
async fn update_pokemon_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = update_pokemon(
        State(test.into_app_state()),
        IdPath(1),
        Json(UpdatePokemonDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Pokemon not found");

    Ok(())
}

/// Expect 200 with the confirmation message
#[tokio::test]
async fn delete_pokemon_returns_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_pokemon("Pikachu")
        .build()
        .await?;

    let resp = delete_pokemon(State(test.into_app_state()), IdPath(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Pokemon deleted");

    Ok(())
}
