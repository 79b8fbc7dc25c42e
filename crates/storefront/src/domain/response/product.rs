use crate::model::{Category, Product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product together with the categories it is linked to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: Vec<Category>,
}

impl ProductDetailResponse {
    pub fn new(product: Product, category: Vec<Category>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            category,
        }
    }
}
