use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "t_planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_fav::Entity")]
    PlanetFav,
}

impl Related<super::planet_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFav.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
