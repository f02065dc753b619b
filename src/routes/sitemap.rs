use actix_web::HttpResponse;
use serde::Serialize;

use crate::response::ApiMessage;

// Single source of truth for route discovery. Keep in step with the App
// assembly in main.rs.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("GET", "/user/favorites"),
    ("GET", "/character"),
    ("POST", "/character"),
    ("GET", "/character/{id}"),
    ("DELETE", "/character/{id}"),
    ("GET", "/character_fav"),
    ("POST", "/character_fav"),
    ("GET", "/planet"),
    ("POST", "/planet"),
    ("GET", "/planet/{id}"),
    ("DELETE", "/planet/{id}"),
    ("GET", "/planet_fav"),
    ("POST", "/planet_fav"),
];

#[derive(Serialize)]
struct RouteDto {
    method: &'static str,
    path: &'static str,
}

pub async fn index() -> HttpResponse {
    let routes = ROUTES
        .iter()
        .map(|(method, path)| RouteDto { method, path })
        .collect::<Vec<_>>();
    HttpResponse::Ok().json(routes)
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiMessage::new("resource not found"))
}
