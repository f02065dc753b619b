use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "t_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_fav::Entity")]
    CharacterFav,
}

impl Related<super::character_fav::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFav.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
