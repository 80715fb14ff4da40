//! Shared test utilities for the Orrery workspace.
//!
//! Provides a declarative [`TestBuilder`] for constructing in-memory SQLite
//! databases with a chosen set of catalog tables, plus fixture helpers for
//! inserting users, people, planets, and favorites.

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError, TestSetup};
}
