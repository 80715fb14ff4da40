use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::PlanetDto,
    server::{
        data::{favorite::FavoriteRepository, planet::PlanetRepository},
        error::Error,
    },
};

/// Service producing serialized planet views.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Serializes a planet with its favorite count computed at call time.
    pub async fn serialize(&self, planet: entity::planet::Model) -> Result<PlanetDto, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite_count = favorite_repo.count_by_planet(planet.id).await?;

        Ok(PlanetDto {
            id: planet.id,
            name: planet.name,
            favorite_count,
        })
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        let mut dtos = Vec::with_capacity(planets.len());
        for planet in planets {
            dtos.push(self.serialize(planet).await?);
        }

        Ok(dtos)
    }
}
