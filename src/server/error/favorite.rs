use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation errors for favorite creation.
///
/// The stored schema allows inconsistent rows (nullable subject foreign
/// keys, free discriminator), so consistency is enforced here before any
/// insert.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("Favorite kind '{kind}' requires {subject}_id to be set")]
    MissingSubject {
        kind: &'static str,
        subject: &'static str,
    },
    #[error("Favorite kind '{kind}' must not carry a {subject}_id")]
    ForeignSubject {
        kind: &'static str,
        subject: &'static str,
    },
    #[error("Favorite kind '{0}' is not backed by a relationship and cannot be created")]
    UnsupportedKind(&'static str),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
