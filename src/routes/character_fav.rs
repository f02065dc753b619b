use actix_web::{web, HttpResponse};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::dto::CharacterFavDto;
use crate::entity::character_fav;
use crate::error::ApiError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    );
}

#[derive(Deserialize)]
struct CreateCharacterFavRequest {
    user_id: i32,
    character_id: i32,
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let rows = character_fav::Entity::find()
        .order_by_asc(character_fav::Column::Id)
        .all(db.get_ref())
        .await?;
    if rows.is_empty() {
        return Err(ApiError::not_found("No se han encontrado character favorites"));
    }
    let results = rows.into_iter().map(CharacterFavDto::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(results))
}

async fn create(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreateCharacterFavRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let row = character_fav::ActiveModel {
        user_id: Set(payload.user_id),
        character_id: Set(payload.character_id),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await?;
    Ok(HttpResponse::Created().json(CharacterFavDto::from(row)))
}
