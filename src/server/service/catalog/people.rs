use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{PersonDetailDto, PersonDto},
    server::{
        data::{favorite::FavoriteRepository, people::PeopleRepository},
        error::Error,
    },
};

/// Service producing serialized people views.
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Serializes a person with their favorite count computed at call time.
    pub async fn serialize(&self, people: entity::people::Model) -> Result<PersonDto, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite_count = favorite_repo.count_by_people(people.id).await?;

        Ok(PersonDto {
            id: people.id,
            name: people.name,
            favorite_count,
        })
    }

    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people_repo = PeopleRepository::new(self.db);

        let people = people_repo.get_all().await?;

        let mut dtos = Vec::with_capacity(people.len());
        for person in people {
            dtos.push(self.serialize(person).await?);
        }

        Ok(dtos)
    }

    /// Extended view including the fullnames of favoriting users.
    ///
    /// A favorite whose user row is missing is an integrity fault (the
    /// user_id foreign key is non-null) and surfaces as an internal error.
    pub async fn get_person_detail(
        &self,
        people_id: i32,
    ) -> Result<Option<PersonDetailDto>, Error> {
        let people_repo = PeopleRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let people = match people_repo.get_by_id(people_id).await? {
            Some(people) => people,
            None => return Ok(None),
        };

        let rows = favorite_repo.get_by_people_with_users(people.id).await?;
        let favorite_count = rows.len() as u64;

        let favorite_users = rows
            .into_iter()
            .map(|(favorite, maybe_user)| {
                maybe_user.map(|user| user.fullname).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find user for favorite ID {} referencing people ID {}",
                        favorite.id, people.id
                    ))
                })
            })
            .collect::<Result<Vec<String>, Error>>()?;

        Ok(Some(PersonDetailDto {
            id: people.id,
            name: people.name,
            favorite_count,
            favorite_users,
        }))
    }
}
