//! Error types for the Orrery server application.
//!
//! Domain-specific error enums (admin, configuration, favorites) are
//! aggregated into a single [`Error`] type using `thiserror`'s `#[from]`
//! conversions. All errors implement `IntoResponse` so handlers can return
//! them directly.

pub mod admin;
pub mod config;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{admin::AdminError, config::ConfigError, favorite::FavoriteError},
};

/// Main error type for the Orrery server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin interface error (unknown entity view).
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Favorite validation error (discriminator/subject mismatch).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Internal error indicating a bug in Orrery's code.
    ///
    /// Should never occur in normal operation; reaching it means a stored
    /// row violates an invariant the data layer is supposed to enforce.
    #[error("Internal error with Orrery's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own mappings; everything else is a logged 500
/// with a generic body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client so internal details never leak into responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
