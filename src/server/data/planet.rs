use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
