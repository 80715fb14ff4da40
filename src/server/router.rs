//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/admin/{entity}` - Admin row listing per entity
/// - `GET /api/admin/{entity}/form` - Synthesized admin form schema
/// - `GET /api/user` - Serialized users
/// - `GET /api/people` - Serialized people
/// - `GET /api/people/{id}` - Person detail with favoriting users
/// - `GET /api/planet` - Serialized planets
/// - `GET /api/favorite` - Serialized favorites
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Orrery", description = "Star catalog administration API"), tags(
        (name = controller::admin::ADMIN_TAG, description = "Auto-generated admin CRUD routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Catalog read routes"),
        (name = controller::user::USER_TAG, description = "User read routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::admin::list_entity))
        .routes(routes!(controller::admin::entity_form))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_favorites))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
