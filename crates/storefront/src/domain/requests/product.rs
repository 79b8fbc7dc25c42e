use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct PriceTierRequest {
    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i64,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(alias = "SKU")]
    pub sku: String,

    #[serde(default)]
    pub category_id: Vec<i64>,

    #[serde(default)]
    #[validate(nested)]
    pub price: Vec<PriceTierRequest>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: i64,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(alias = "SKU")]
    pub sku: String,

    #[serde(default)]
    pub category_id: Vec<i64>,

    #[serde(default)]
    #[validate(nested)]
    pub price: Vec<PriceTierRequest>,
}
