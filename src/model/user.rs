use serde::{Deserialize, Serialize};

/// Serialized view of a user account.
///
/// Deliberately has no password field: the projection is built from named
/// fields, so the stored password can never leak into a response.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub fullname: String,
    pub is_active: Option<bool>,
}
