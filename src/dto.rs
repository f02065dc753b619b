//! Wire shapes. Every response body goes through one of these; the user's
//! password never leaves the database.

use serde::Serialize;

use crate::entity::{character, character_fav, planet, planet_fav};

#[derive(Serialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
}

impl From<character::Model> for CharacterDto {
    fn from(model: character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
        }
    }
}

#[derive(Serialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
}

impl From<planet::Model> for PlanetDto {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            population: model.population,
            terrain: model.terrain,
            climate: model.climate,
        }
    }
}

#[derive(Serialize)]
pub struct CharacterFavDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl From<character_fav::Model> for CharacterFavDto {
    fn from(model: character_fav::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
        }
    }
}

#[derive(Serialize)]
pub struct PlanetFavDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<planet_fav::Model> for PlanetFavDto {
    fn from(model: planet_fav::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
        }
    }
}

#[derive(Serialize)]
pub struct UserFavoritesDto {
    pub user_id: i32,
    pub username: String,
    pub character_favorites: Vec<CharacterDto>,
    pub planet_favorites: Vec<PlanetDto>,
}
