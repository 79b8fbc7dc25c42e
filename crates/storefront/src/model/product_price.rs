use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Price that applies once an order quantity exceeds `amount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductPrice {
    pub id: i64,
    pub amount: i64,
    pub price: f64,
    pub product_id: i64,
}

impl ProductPrice {
    pub fn new(product_id: i64, amount: i64, price: f64) -> Self {
        Self {
            id: 0,
            amount,
            price,
            product_id,
        }
    }
}
