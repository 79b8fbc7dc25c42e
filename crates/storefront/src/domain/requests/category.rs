use serde::{Deserialize, Serialize};
use shared::domain::Nullable;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub parent_id: Nullable<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    pub id: i64,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Omit to keep the current parent, send `null` to clear it.
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub parent_id: Nullable<i64>,
}
