//! Fixture factories for catalog entities.

pub mod factory {
    use entity::favorite::FavoriteKind;
    use sea_orm::ActiveValue;

    /// Builds an unsaved user active model with an opaque test password.
    pub fn user(email: &str, fullname: &str) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("hunter2-hashed".to_string()),
            fullname: ActiveValue::Set(fullname.to_string()),
            is_active: ActiveValue::Set(Some(true)),
            ..Default::default()
        }
    }

    pub fn people(name: &str) -> entity::people::ActiveModel {
        entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
    }

    pub fn planet(name: &str) -> entity::planet::ActiveModel {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
    }

    /// Builds an unsaved favorite without any validation applied, allowing
    /// tests to force rows the application layer would reject.
    pub fn favorite(
        kind: FavoriteKind,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> entity::favorite::ActiveModel {
        entity::favorite::ActiveModel {
            kind: ActiveValue::Set(kind),
            planet_id: ActiveValue::Set(planet_id),
            people_id: ActiveValue::Set(people_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
    }
}
