use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// List all users in their serialized form
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Serialized users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_users().await?;

    Ok((StatusCode::OK, Json(users)).into_response())
}
