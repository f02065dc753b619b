use actix_web::{web, HttpResponse};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::dto::{CharacterDto, PlanetDto, UserFavoritesDto};
use crate::entity::{character, character_fav, planet, planet_fav, user};
use crate::error::ApiError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(hello)))
        .service(web::resource("/favorites").route(web::get().to(favorites)));
}

#[derive(Serialize)]
struct Greeting {
    msg: &'static str,
}

async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(Greeting {
        msg: "Hello, this is your GET /user response ",
    })
}

// One entry per user, empty arrays included. Favorites whose target row no
// longer exists are skipped.
async fn favorites(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db.get_ref())
        .await?;

    let mut results = Vec::with_capacity(users.len());
    for u in users {
        let character_favorites = character_fav::Entity::find()
            .filter(character_fav::Column::UserId.eq(u.id))
            .find_also_related(character::Entity)
            .all(db.get_ref())
            .await?
            .into_iter()
            .filter_map(|(_, c)| c)
            .map(CharacterDto::from)
            .collect::<Vec<_>>();

        let planet_favorites = planet_fav::Entity::find()
            .filter(planet_fav::Column::UserId.eq(u.id))
            .find_also_related(planet::Entity)
            .all(db.get_ref())
            .await?
            .into_iter()
            .filter_map(|(_, p)| p)
            .map(PlanetDto::from)
            .collect::<Vec<_>>();

        results.push(UserFavoritesDto {
            user_id: u.id,
            username: u.username,
            character_favorites,
            planet_favorites,
        });
    }

    Ok(HttpResponse::Ok().json(results))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
    use serde_json::{json, Value};

    use super::config;
    use crate::db::test_db;
    use crate::entity::{character, character_fav, planet, planet_fav, user};

    macro_rules! user_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($db.clone()))
                    .service(web::scope("/user").configure(config)),
            )
            .await
        };
    }

    async fn seed_user(db: &DatabaseConnection, username: &str) -> user::Model {
        user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(format!("{}@rebellion.org", username)),
            password: Set("secret".to_string()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn greeting_is_static() {
        let db = test_db().await;
        let app = user_app!(db);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/user").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"msg": "Hello, this is your GET /user response "}));
    }

    #[actix_web::test]
    async fn favorites_with_no_users_is_an_empty_200() {
        let db = test_db().await;
        let app = user_app!(db);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/user/favorites").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn user_without_favorites_still_gets_an_entry() {
        let db = test_db().await;
        let app = user_app!(db);

        seed_user(&db, "luke").await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/user/favorites").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([{
                "user_id": 1,
                "username": "luke",
                "character_favorites": [],
                "planet_favorites": []
            }])
        );
    }

    #[actix_web::test]
    async fn favorites_resolve_to_serialized_records() {
        let db = test_db().await;
        let app = user_app!(db);

        let u = seed_user(&db, "leia").await;
        let c = character::ActiveModel {
            name: Set("Chewbacca".to_string()),
            height: Set(228),
            mass: Set(112),
            hair_color: Set("brown".to_string()),
            skin_color: Set("unknown".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let p = planet::ActiveModel {
            name: Set("Alderaan".to_string()),
            population: Set(2_000_000_000),
            terrain: Set("grasslands".to_string()),
            climate: Set("temperate".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        character_fav::ActiveModel {
            user_id: Set(u.id),
            character_id: Set(c.id),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        planet_fav::ActiveModel {
            user_id: Set(u.id),
            planet_id: Set(p.id),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/user/favorites").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([{
                "user_id": 1,
                "username": "leia",
                "character_favorites": [{
                    "id": 1,
                    "name": "Chewbacca",
                    "height": 228,
                    "mass": 112,
                    "hair_color": "brown",
                    "skin_color": "unknown"
                }],
                "planet_favorites": [{
                    "id": 1,
                    "name": "Alderaan",
                    "population": 2000000000i64,
                    "terrain": "grasslands",
                    "climate": "temperate"
                }]
            }])
        );
    }

    #[actix_web::test]
    async fn dangling_favorites_are_skipped() {
        let db = test_db().await;
        let app = user_app!(db);

        let u = seed_user(&db, "han").await;
        character_fav::ActiveModel {
            user_id: Set(u.id),
            character_id: Set(42),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/user/favorites").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["character_favorites"], json!([]));
    }
}
