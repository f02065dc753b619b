mod config;
mod db;
mod dto;
mod entity;
mod error;
mod response;
mod routes;

use actix_web::{middleware, web, App, HttpServer};
use config::AppConfig;
use db::connect_db;
use log::info;
use response::json_error_handler;
use routes::{character, character_fav, planet, planet_fav, sitemap, user};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    let db = connect_db(&config).await;
    let server_port = config.server_port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::from_fn(routes::cors::cors_handler))
            .route("/", web::get().to(sitemap::index))
            .service(web::scope("/user").configure(user::config))
            .service(web::scope("/character").configure(character::config))
            .service(web::scope("/character_fav").configure(character_fav::config))
            .service(web::scope("/planet").configure(planet::config))
            .service(web::scope("/planet_fav").configure(planet_fav::config))
            .default_service(web::route().to(sitemap::not_found))
    })
    .bind(("0.0.0.0", server_port))?;
    info!("server started at http://0.0.0.0:{}", server_port);
    server.run().await
}
