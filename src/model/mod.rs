//! Wire-format data transfer objects shared across the API surface.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod user;
