use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

/// Service producing serialized user views.
///
/// The projection is built field-by-field from the stored model; the
/// password column is never part of it.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(to_dto))
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(to_dto).collect())
    }
}

fn to_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        fullname: user.fullname,
        is_active: user.is_active,
    }
}
