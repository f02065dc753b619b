use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "t_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_fav::Entity")]
    CharacterFav,
    #[sea_orm(has_many = "super::planet_fav::Entity")]
    PlanetFav,
}

impl Related<super::character_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFav.def()
    }
}

impl Related<super::planet_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFav.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
