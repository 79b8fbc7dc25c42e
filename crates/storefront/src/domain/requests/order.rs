use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub product_id: i64,

    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i64,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[serde(default)]
    #[schema(value_type = i32, minimum = 0, maximum = 3)]
    pub status: OrderStatus,
}
