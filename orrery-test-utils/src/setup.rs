use entity::favorite::FavoriteKind;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

use crate::{error::TestError, fixtures::factory};

/// A fully built test environment with an in-memory SQLite database.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Inserts a user fixture and returns the stored model.
    pub async fn insert_user(
        &self,
        email: &str,
        fullname: &str,
    ) -> Result<entity::user::Model, TestError> {
        let user = factory::user(email, fullname).insert(&self.db).await?;

        Ok(user)
    }

    pub async fn insert_people(&self, name: &str) -> Result<entity::people::Model, TestError> {
        let people = factory::people(name).insert(&self.db).await?;

        Ok(people)
    }

    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = factory::planet(name).insert(&self.db).await?;

        Ok(planet)
    }

    /// Inserts a favorite row directly, bypassing application-level
    /// validation so tests can construct inconsistent rows on purpose.
    pub async fn insert_favorite(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = factory::favorite(kind, user_id, planet_id, people_id)
            .insert(&self.db)
            .await?;

        Ok(favorite)
    }
}
