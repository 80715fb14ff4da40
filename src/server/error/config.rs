use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration failures.
///
/// Raised while reading `DATABASE_URL` and `ORRERY_SECRET_KEY` at startup;
/// both abort the process rather than letting the server run with a missing
/// or weak secret. Outside startup the variants still map to a generic 500
/// so the variable names never reach a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
