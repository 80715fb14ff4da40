use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{FavoriteDto, PersonDetailDto, PersonDto, PlanetDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::catalog::{
            favorite::FavoriteService, people::PeopleService, planet::PlanetService,
        },
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List all people in their serialized form
#[utoipa::path(
    get,
    path = "/api/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Serialized people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people_service = PeopleService::new(&state.db);

    let people = people_service.get_people().await?;

    Ok((StatusCode::OK, Json(people)).into_response())
}

/// Get one person with the fullnames of their favoriting users
#[utoipa::path(
    get,
    path = "/api/people/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Serialized person detail", body = PersonDetailDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let people_service = PeopleService::new(&state.db);

    let detail = match people_service.get_person_detail(id).await? {
        Some(detail) => detail,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Person not found".to_string(),
                }),
            )
                .into_response());
        }
    };

    Ok((StatusCode::OK, Json(detail)).into_response())
}

/// List all planets in their serialized form
#[utoipa::path(
    get,
    path = "/api/planet",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Serialized planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_planets().await?;

    Ok((StatusCode::OK, Json(planets)).into_response())
}

/// List all favorites with their resolved subjects
#[utoipa::path(
    get,
    path = "/api/favorite",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Serialized favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_favorites().await?;

    Ok((StatusCode::OK, Json(favorites)).into_response())
}
