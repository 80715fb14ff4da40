use sea_orm::entity::prelude::*;

/// Discriminator for which kind of subject a favorite points at.
///
/// All four variants exist in the stored schema, but only `Planet` and
/// `People` are backed by a foreign key; `Vehicle` and `Film` rows cannot
/// satisfy the subject-consistency rule and are rejected at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "people")]
    People,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
    #[sea_orm(string_value = "film")]
    Film,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: FavoriteKind,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
