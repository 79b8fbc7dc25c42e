use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::domain::Nullable;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Parent category; only one level of nesting is used.
    #[serde(default)]
    #[sqlx(try_from = "Option<i64>")]
    #[schema(value_type = Option<i64>)]
    pub parent_id: Nullable<i64>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    #[sqlx(try_from = "Option<DateTime<Utc>>")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated: Nullable<DateTime<Utc>>,
}

impl Category {
    pub fn new(name: impl Into<String>, parent_id: Nullable<i64>) -> Self {
        Self {
            name: name.into(),
            parent_id,
            ..Default::default()
        }
    }
}
