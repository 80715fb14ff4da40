//! HTTP controllers for the admin and read APIs.

pub mod admin;
pub mod catalog;
pub mod user;
