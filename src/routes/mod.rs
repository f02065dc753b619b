pub mod character;
pub mod character_fav;
pub mod cors;
pub mod planet;
pub mod planet_fav;
pub mod sitemap;
pub mod user;
