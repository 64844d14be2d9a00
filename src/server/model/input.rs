//! Validated inputs for record creation.
//!
//! Create payloads arrive with every field optional. Converting them into these types checks
//! that the required fields are present before anything is written, and substitutes defaults.

use crate::{
    model::{pokeball::CreatePokeballDto, pokemon::CreatePokemonDto, user::CreateUserDto},
    server::error::validation::ValidationError,
};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// A user ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// Required, unique.
    pub email: String,
    /// Opaque, optional.
    pub password: Option<String>,
    /// Required.
    pub first_name: String,
    /// Optional.
    pub last_name: Option<String>,
    /// Optional.
    pub age: Option<i32>,
    /// Optional.
    pub gender: Option<String>,
    /// `true` unless the payload said otherwise.
    pub is_active: bool,
}

impl TryFrom<CreateUserDto> for NewUser {
    type Error = ValidationError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            email: required(dto.email, "email")?,
            password: dto.password,
            first_name: required(dto.first_name, "first_name")?,
            last_name: dto.last_name,
            age: dto.age,
            gender: dto.gender,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// A pokemon ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPokemon {
    /// Required.
    pub name: String,
    /// Required.
    pub pokemon_type: String,
    /// Optional free text.
    pub description: Option<String>,
}

impl TryFrom<CreatePokemonDto> for NewPokemon {
    type Error = ValidationError;

    fn try_from(dto: CreatePokemonDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(dto.name, "name")?,
            pokemon_type: required(dto.pokemon_type, "type")?,
            description: dto.description,
        })
    }
}

/// A pokeball ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPokeball {
    /// Required.
    pub name: String,
    /// Optional free text.
    pub effect: Option<String>,
}

impl TryFrom<CreatePokeballDto> for NewPokeball {
    type Error = ValidationError;

    fn try_from(dto: CreatePokeballDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(dto.name, "name")?,
            effect: dto.effect,
        })
    }
}
