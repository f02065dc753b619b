pub mod character;
pub mod character_fav;
pub mod planet;
pub mod planet_fav;
pub mod user;
