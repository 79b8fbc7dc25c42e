use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::domain::Nullable;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    #[sqlx(try_from = "Option<DateTime<Utc>>")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated: Nullable<DateTime<Utc>>,
}

impl Product {
    /// A record not yet stored; the store assigns `id` and `created`.
    pub fn new(name: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            ..Default::default()
        }
    }
}
