use actix_web::{web, HttpResponse};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::dto::PlanetDto;
use crate::entity::planet;
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
struct CreatePlanetRequest {
    name: String,
    population: i64,
    terrain: String,
    climate: String,
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let rows = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(db.get_ref())
        .await?;
    if rows.is_empty() {
        return Err(ApiError::not_found("No se han encontrado planets"));
    }
    let results = rows.into_iter().map(PlanetDto::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(results))
}

async fn create(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreatePlanetRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let row = planet::ActiveModel {
        name: Set(payload.name),
        population: Set(payload.population),
        terrain: Set(payload.terrain),
        climate: Set(payload.climate),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;
    Ok(HttpResponse::Created().json(PlanetDto::from(row)))
}

async fn detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let planet_id = path.into_inner();
    let row = planet::Entity::find_by_id(planet_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Planeta no encontrado"))?;
    Ok(HttpResponse::Ok().json(PlanetDto::from(row)))
}

async fn remove(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let planet_id = path.into_inner();
    planet::Entity::find_by_id(planet_id)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("Planeta no encontrado"))?;
    planet::Entity::delete_by_id(planet_id)
        .exec(db.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiMessage::new("Planet eliminado")))
}
