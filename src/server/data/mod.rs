//! Data access layer.
//!
//! Repositories wrap a borrowed [`sea_orm::DatabaseConnection`] and expose
//! the queries the services and admin layer need. The favorite repository
//! additionally enforces the discriminator/subject consistency rule the
//! stored schema cannot express.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
