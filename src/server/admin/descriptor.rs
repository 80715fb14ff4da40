use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// An admin-manageable entity and its statically-declared metadata.
///
/// This enum is the compile-time replacement for runtime model
/// introspection: columns, relationships, row labels, and listing queries
/// are all declared here per entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdminModel {
    User,
    TokenBlockedList,
    People,
    Planet,
    Favorite,
}

/// A foreign-key-backed relationship of an entity.
///
/// `name` doubles as the injected form field name; `related` is the entity
/// whose rows back the field's choices.
#[derive(Copy, Clone, Debug)]
pub struct RelationDescriptor {
    pub name: &'static str,
    pub related: AdminModel,
}

/// A row rendered for admin list screens and choice options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRow {
    pub id: i32,
    pub label: String,
}

static FAVORITE_RELATIONS: &[RelationDescriptor] = &[
    RelationDescriptor {
        name: "planet",
        related: AdminModel::Planet,
    },
    RelationDescriptor {
        name: "people",
        related: AdminModel::People,
    },
    RelationDescriptor {
        name: "user",
        related: AdminModel::User,
    },
];

impl AdminModel {
    /// URL path segment identifying the entity in the admin API.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::TokenBlockedList => "token_blocked_list",
            Self::People => "people",
            Self::Planet => "planet",
            Self::Favorite => "favorite",
        }
    }

    /// Human-readable entity name, used in choice-field placeholders.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::TokenBlockedList => "TokenBlockedList",
            Self::People => "People",
            Self::Planet => "Planet",
            Self::Favorite => "Favorite",
        }
    }

    /// Full column list, primary key included.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::User => &["id", "email", "password", "fullname", "is_active"],
            Self::TokenBlockedList => &["id", "jti"],
            Self::People => &["id", "name"],
            Self::Planet => &["id", "name"],
            Self::Favorite => &["id", "type", "planet_id", "people_id", "user_id"],
        }
    }

    /// Foreign-key-backed relationships of the entity.
    pub fn relations(&self) -> &'static [RelationDescriptor] {
        match self {
            Self::Favorite => FAVORITE_RELATIONS,
            _ => &[],
        }
    }

    /// Lists the entity's rows ordered by id, each with its label.
    pub async fn list_rows(&self, db: &DatabaseConnection) -> Result<Vec<AdminRow>, DbErr> {
        let rows = match self {
            Self::User => entity::prelude::User::find()
                .order_by_asc(entity::user::Column::Id)
                .all(db)
                .await?
                .into_iter()
                .map(|user| AdminRow {
                    id: user.id,
                    label: user.fullname,
                })
                .collect(),
            Self::TokenBlockedList => entity::prelude::TokenBlockedList::find()
                .order_by_asc(entity::token_blocked_list::Column::Id)
                .all(db)
                .await?
                .into_iter()
                .map(|token| AdminRow {
                    id: token.id,
                    label: token.jti,
                })
                .collect(),
            Self::People => entity::prelude::People::find()
                .order_by_asc(entity::people::Column::Id)
                .all(db)
                .await?
                .into_iter()
                .map(|people| AdminRow {
                    id: people.id,
                    label: people.name,
                })
                .collect(),
            Self::Planet => entity::prelude::Planet::find()
                .order_by_asc(entity::planet::Column::Id)
                .all(db)
                .await?
                .into_iter()
                .map(|planet| AdminRow {
                    id: planet.id,
                    label: planet.name,
                })
                .collect(),
            Self::Favorite => entity::prelude::Favorite::find()
                .order_by_asc(entity::favorite::Column::Id)
                .all(db)
                .await?
                .into_iter()
                .map(|favorite| AdminRow {
                    id: favorite.id,
                    label: "Favorite".to_string(),
                })
                .collect(),
        };

        Ok(rows)
    }
}
