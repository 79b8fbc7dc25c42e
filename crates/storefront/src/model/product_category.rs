use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Join row between a product and one of its categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductCategory {
    pub id: i64,
    pub product_id: i64,
    pub category_id: i64,
}

impl ProductCategory {
    pub fn new(product_id: i64, category_id: i64) -> Self {
        Self {
            id: 0,
            product_id,
            category_id,
        }
    }
}
