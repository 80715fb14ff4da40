//! Declarative test environment builder.
//!
//! Configure which tables exist before execution; all table creation happens
//! during the final `build()` call against a fresh in-memory SQLite database.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, EntityTrait, Schema};

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// connected [`TestSetup`]. Building with no tables configured is valid and
/// is how tests simulate a broken database (every query fails).
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
        }
    }

    /// Add all five catalog tables: user, token_blocked_list, people,
    /// planet, and favorites.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement from the entity, executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connects to a fresh in-memory SQLite database and creates every
    /// configured table.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        let mut tables = self.tables;

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);

            tables.push(schema.create_table_from_entity(entity::prelude::User));
            tables.push(schema.create_table_from_entity(entity::prelude::TokenBlockedList));
            tables.push(schema.create_table_from_entity(entity::prelude::People));
            tables.push(schema.create_table_from_entity(entity::prelude::Planet));
            tables.push(schema.create_table_from_entity(entity::prelude::Favorite));
        }

        for stmt in &tables {
            db.execute(stmt).await?;
        }

        Ok(TestSetup { db })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
