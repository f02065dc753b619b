use actix_web::{web, HttpResponse};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::dto::CharacterDto;
use crate::entity::character;
use crate::error::ApiError;
use crate::response::ApiMessage;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id:\\d+}")
            .route(web::get().to(detail))
            .route(web::delete().to(remove)),
    );
}

#[derive(Deserialize)]
struct CreateCharacterRequest {
    name: String,
    height: i32,
    mass: i32,
    hair_color: String,
    skin_color: String,
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let rows = character::Entity::find()
        .order_by_asc(character::Column::Id)
        .all(db.get_ref())
        .await?;
    if rows.is_empty() {
        return Err(ApiError::not_found("No se han encontrado characters"));
    }
    let results = rows.into_iter().map(CharacterDto::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(results))
}

async fn create(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreateCharacterRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let row = character::ActiveModel {
        name: Set(payload.name),
        height: Set(payload.height),
        mass: Set(payload.mass),
        hair_color: Set(payload.hair_color),
        skin_color: Set(payload.skin_color),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;
    Ok(HttpResponse::Created().json(CharacterDto::from(row)))
}

async fn detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let character_id = path.into_inner();
    let row = character::Entity::find_by_id(character_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Personaje no encontrado"))?;
    Ok(HttpResponse::Ok().json(CharacterDto::from(row)))
}

async fn remove(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let character_id = path.into_inner();
    character::Entity::find_by_id(character_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Personaje no encontrado"))?;
    character::Entity::delete_by_id(character_id)
        .exec(db.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiMessage::new("Character eliminado")))
}
