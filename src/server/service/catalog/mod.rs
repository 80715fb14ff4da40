//! Services for the catalog entities: people, planets, and favorites.

pub mod favorite;
pub mod people;
pub mod planet;
