use entity::favorite::FavoriteKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::error::{favorite::FavoriteError, Error};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a favorite after checking the discriminator/subject rule.
    ///
    /// Exactly the subject foreign key named by `kind` must be set; the
    /// other must be absent. `Vehicle` and `Film` have no subject foreign
    /// key and are always rejected.
    pub async fn create(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> Result<entity::favorite::Model, Error> {
        validate_subject(kind, planet_id, people_id)?;

        let favorite = entity::favorite::ActiveModel {
            kind: ActiveValue::Set(kind),
            planet_id: ActiveValue::Set(planet_id),
            people_id: ActiveValue::Set(people_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }

    pub async fn get_by_id(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Live count of favorites referencing a planet.
    pub async fn count_by_planet(&self, planet_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .count(self.db)
            .await
    }

    /// Live count of favorites referencing a person.
    pub async fn count_by_people(&self, people_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::PeopleId.eq(people_id))
            .count(self.db)
            .await
    }

    /// Favorites referencing a person, each with the owning user when the
    /// user row still exists.
    pub async fn get_by_people_with_users(
        &self,
        people_id: i32,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::PeopleId.eq(people_id))
            .order_by_asc(entity::favorite::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

/// Checks that the populated subject foreign keys match the discriminator.
fn validate_subject(
    kind: FavoriteKind,
    planet_id: Option<i32>,
    people_id: Option<i32>,
) -> Result<(), FavoriteError> {
    match kind {
        FavoriteKind::Planet => {
            if planet_id.is_none() {
                return Err(FavoriteError::MissingSubject {
                    kind: "planet",
                    subject: "planet",
                });
            }
            if people_id.is_some() {
                return Err(FavoriteError::ForeignSubject {
                    kind: "planet",
                    subject: "people",
                });
            }
        }
        FavoriteKind::People => {
            if people_id.is_none() {
                return Err(FavoriteError::MissingSubject {
                    kind: "people",
                    subject: "people",
                });
            }
            if planet_id.is_some() {
                return Err(FavoriteError::ForeignSubject {
                    kind: "people",
                    subject: "planet",
                });
            }
        }
        FavoriteKind::Vehicle => return Err(FavoriteError::UnsupportedKind("vehicle")),
        FavoriteKind::Film => return Err(FavoriteError::UnsupportedKind("film")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use entity::favorite::FavoriteKind;
    use orrery_test_utils::prelude::*;

    use crate::server::error::{favorite::FavoriteError, Error};

    use super::FavoriteRepository;

    /// Expect success when creating a planet favorite with only planet_id set
    #[tokio::test]
    async fn test_create_planet_favorite_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.insert_user("ana@example.com", "Ana Solo").await?;
        let planet = test.insert_planet("Tatooine").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        let result = favorite_repository
            .create(FavoriteKind::Planet, user.id, Some(planet.id), None)
            .await;

        assert!(result.is_ok());
        let favorite = result.unwrap();
        assert_eq!(favorite.kind, FavoriteKind::Planet);
        assert_eq!(favorite.planet_id, Some(planet.id));
        assert_eq!(favorite.people_id, None);

        Ok(())
    }

    /// Expect success when creating a people favorite with only people_id set
    #[tokio::test]
    async fn test_create_people_favorite_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.insert_user("ana@example.com", "Ana Solo").await?;
        let people = test.insert_people("Luke Skywalker").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        let result = favorite_repository
            .create(FavoriteKind::People, user.id, None, Some(people.id))
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Expect Error when the discriminator names a subject whose key is unset
    #[tokio::test]
    async fn test_create_missing_subject_error() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.insert_user("ana@example.com", "Ana Solo").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        let result = favorite_repository
            .create(FavoriteKind::Planet, user.id, None, None)
            .await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::MissingSubject { .. }))
        ));

        Ok(())
    }

    /// Expect Error when the other subject's key is also populated
    #[tokio::test]
    async fn test_create_foreign_subject_error() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.insert_user("ana@example.com", "Ana Solo").await?;
        let planet = test.insert_planet("Tatooine").await?;
        let people = test.insert_people("Luke Skywalker").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        let result = favorite_repository
            .create(
                FavoriteKind::Planet,
                user.id,
                Some(planet.id),
                Some(people.id),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::ForeignSubject { .. }))
        ));

        Ok(())
    }

    /// Expect Error when creating a favorite of an unsupported kind
    #[tokio::test]
    async fn test_create_unsupported_kind_error() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.insert_user("ana@example.com", "Ana Solo").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        let result = favorite_repository
            .create(FavoriteKind::Vehicle, user.id, None, None)
            .await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::UnsupportedKind(
                "vehicle"
            )))
        ));

        Ok(())
    }

    /// Expect counts to track the exact number of referencing favorites
    #[tokio::test]
    async fn test_count_by_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let ana = test.insert_user("ana@example.com", "Ana Solo").await?;
        let ben = test.insert_user("ben@example.com", "Ben Kenobi").await?;
        let planet = test.insert_planet("Tatooine").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);

        assert_eq!(favorite_repository.count_by_planet(planet.id).await?, 0);

        favorite_repository
            .create(FavoriteKind::Planet, ana.id, Some(planet.id), None)
            .await
            .unwrap();
        favorite_repository
            .create(FavoriteKind::Planet, ben.id, Some(planet.id), None)
            .await
            .unwrap();

        assert_eq!(favorite_repository.count_by_planet(planet.id).await?, 2);

        Ok(())
    }

    /// Expect favoriting users returned alongside each favorite
    #[tokio::test]
    async fn test_get_by_people_with_users() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let ana = test.insert_user("ana@example.com", "Ana Solo").await?;
        let people = test.insert_people("Luke Skywalker").await?;

        let favorite_repository = FavoriteRepository::new(&test.db);
        favorite_repository
            .create(FavoriteKind::People, ana.id, None, Some(people.id))
            .await
            .unwrap();

        let rows = favorite_repository
            .get_by_people_with_users(people.id)
            .await?;

        assert_eq!(rows.len(), 1);
        let (_, user) = &rows[0];
        assert_eq!(user.as_ref().map(|u| u.fullname.as_str()), Some("Ana Solo"));

        Ok(())
    }
}
