use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AdminListDto, AdminRowDto, ChoiceDto, FormFieldDto, FormSchemaDto},
        api::ErrorDto,
    },
    server::{
        admin::{FormField, FormSchema},
        error::{admin::AdminError, Error},
        model::app::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List an admin-managed entity's rows with the view's display columns
#[utoipa::path(
    get,
    path = "/api/admin/{entity}",
    tag = ADMIN_TAG,
    params(
        ("entity" = String, Path, description = "Admin entity slug")
    ),
    responses(
        (status = 200, description = "Rows of the entity", body = AdminListDto),
        (status = 404, description = "No admin view registered for the entity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entity(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let site = state.admin.read().await;

    let view = site
        .view(&entity)
        .ok_or_else(|| AdminError::UnknownEntity(entity.clone()))?;

    let rows = view.model().list_rows(&state.db).await?;

    let dto = AdminListDto {
        entity: view.model().slug().to_string(),
        columns: view.column_list().to_vec(),
        rows: rows
            .into_iter()
            .map(|row| AdminRowDto {
                id: row.id,
                label: row.label,
            })
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Get the synthesized create/edit form for an admin-managed entity
///
/// Triggers form augmentation: every declared relationship of the entity
/// gets a single-choice field backed by the related table's rows.
#[utoipa::path(
    get,
    path = "/api/admin/{entity}/form",
    tag = ADMIN_TAG,
    params(
        ("entity" = String, Path, description = "Admin entity slug")
    ),
    responses(
        (status = 200, description = "Synthesized form schema", body = FormSchemaDto),
        (status = 404, description = "No admin view registered for the entity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn entity_form(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let mut site = state.admin.write().await;

    let view = site
        .view_mut(&entity)
        .ok_or_else(|| AdminError::UnknownEntity(entity.clone()))?;

    let schema = view.scaffold_form(&state.db).await;

    Ok((StatusCode::OK, Json(to_form_dto(schema))).into_response())
}

fn to_form_dto(schema: FormSchema) -> FormSchemaDto {
    FormSchemaDto {
        entity: schema.entity.to_string(),
        fields: schema
            .fields
            .into_iter()
            .map(|field| match field {
                FormField::Text { name } => FormFieldDto {
                    name,
                    kind: "text".to_string(),
                    choices: Vec::new(),
                },
                FormField::Select { name, choices } => FormFieldDto {
                    name,
                    kind: "select".to_string(),
                    choices: choices
                        .into_iter()
                        .map(|choice| ChoiceDto {
                            value: choice.value,
                            label: choice.label,
                        })
                        .collect(),
                },
            })
            .collect(),
    }
}
