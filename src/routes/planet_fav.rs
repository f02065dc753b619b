use actix_web::{web, HttpResponse};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::dto::PlanetFavDto;
use crate::entity::planet_fav;
use crate::error::ApiError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    );
}

#[derive(Deserialize)]
struct CreatePlanetFavRequest {
    user_id: i32,
    planet_id: i32,
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let rows = planet_fav::Entity::find()
        .order_by_asc(planet_fav::Column::Id)
        .all(db.get_ref())
        .await?;
    if rows.is_empty() {
        return Err(ApiError::not_found("No se han encontrado planet favorites"));
    }
    let results = rows.into_iter().map(PlanetFavDto::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(results))
}

async fn create(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreatePlanetFavRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let row = planet_fav::ActiveModel {
        user_id: Set(payload.user_id),
        planet_id: Set(payload.planet_id),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;
    Ok(HttpResponse::Created().json(PlanetFavDto::from(row)))
}
