//! Service layer producing the serialized views of each entity.
//!
//! Services coordinate repositories and map stored rows into wire DTOs.
//! Favorite counts are computed at call time, never cached, so a view is
//! always consistent with the favorites table.

pub mod catalog;
pub mod user;
