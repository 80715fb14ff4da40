//! Server application core modules.
//!
//! Contains all server-side functionality for Orrery: configuration, error
//! types, the data access layer, serialized-view services, the admin form
//! layer, HTTP controllers, routing, and startup.

pub mod admin;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
