use serde::{Deserialize, Serialize};

/// Listing of an admin-managed entity's rows.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminListDto {
    pub entity: String,
    /// Columns displayed by the entity's admin view.
    pub columns: Vec<String>,
    pub rows: Vec<AdminRowDto>,
}

/// A single row rendered for the admin list screen.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminRowDto {
    pub id: i32,
    /// Human-readable label for the row.
    pub label: String,
}

/// The synthesized create/edit form for an admin-managed entity.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormSchemaDto {
    pub entity: String,
    pub fields: Vec<FormFieldDto>,
}

/// A single field of a synthesized admin form.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormFieldDto {
    pub name: String,
    /// Field kind: "text" for plain value fields, "select" for
    /// relationship-backed choice fields.
    pub kind: String,
    /// Selectable options; empty for text fields and for choice fields
    /// whose option load failed.
    pub choices: Vec<ChoiceDto>,
}

/// A selectable `(identifier, label)` option of a choice field.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChoiceDto {
    /// Related row id; `null` marks the unselected sentinel.
    pub value: Option<i32>,
    pub label: String,
}
