use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::favorite::FavoriteKind;

use crate::{
    model::catalog::{FavoriteDto, FavoriteItem},
    server::{
        data::{
            favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
        },
        error::Error,
        service::catalog::{people::PeopleService, planet::PlanetService},
    },
};

/// Service producing serialized favorite views.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Serializes a favorite, resolving the subject named by the
    /// discriminator into its own nested serialization.
    ///
    /// Kinds without a backing relationship (vehicle, film) yield a
    /// well-defined `favorite_item: None`. A supported kind whose subject
    /// key is unset, or whose subject row is gone, is an integrity fault
    /// and surfaces as an internal error rather than a panic.
    pub async fn serialize(&self, favorite: entity::favorite::Model) -> Result<FavoriteDto, Error> {
        let favorite_item = match favorite.kind {
            FavoriteKind::Planet => {
                let planet_id = favorite.planet_id.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Favorite ID {} has kind 'planet' but no planet_id set",
                        favorite.id
                    ))
                })?;

                let planet = PlanetRepository::new(self.db)
                    .get_by_id(planet_id)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Failed to find planet ID {} for favorite ID {}",
                            planet_id, favorite.id
                        ))
                    })?;

                Some(FavoriteItem::Planet(
                    PlanetService::new(self.db).serialize(planet).await?,
                ))
            }
            FavoriteKind::People => {
                let people_id = favorite.people_id.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Favorite ID {} has kind 'people' but no people_id set",
                        favorite.id
                    ))
                })?;

                let people = PeopleRepository::new(self.db)
                    .get_by_id(people_id)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Failed to find people ID {} for favorite ID {}",
                            people_id, favorite.id
                        ))
                    })?;

                Some(FavoriteItem::Person(
                    PeopleService::new(self.db).serialize(people).await?,
                ))
            }
            FavoriteKind::Vehicle | FavoriteKind::Film => None,
        };

        Ok(FavoriteDto {
            id: favorite.id,
            kind: favorite.kind.to_value(),
            favorite_item,
        })
    }

    pub async fn get_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorites = favorite_repo.get_all().await?;

        let mut dtos = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            dtos.push(self.serialize(favorite).await?);
        }

        Ok(dtos)
    }
}
