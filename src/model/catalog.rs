use serde::{Deserialize, Serialize};

/// Serialized view of a planet with its live favorite count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    /// Count of favorites referencing this planet, computed at call time.
    pub favorite_count: u64,
}

/// Serialized view of a person with their live favorite count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub favorite_count: u64,
}

/// Extended person view listing the fullnames of favoriting users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetailDto {
    pub id: i32,
    pub name: String,
    pub favorite_count: u64,
    pub favorite_users: Vec<String>,
}

/// Serialized view of a favorite with its resolved subject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: i32,
    /// Wire name of the stored discriminator ("planet", "people",
    /// "vehicle", or "film").
    #[serde(rename = "type")]
    pub kind: String,
    /// Nested serialization of the favorited subject; `null` for kinds not
    /// backed by a relationship.
    pub favorite_item: Option<FavoriteItem>,
}

/// The favorited subject nested inside a [`FavoriteDto`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum FavoriteItem {
    Planet(PlanetDto),
    Person(PersonDto),
}
