use crate::{
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductDetailResponse,
    },
    model::Product,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCatalogService = Arc<dyn ProductCatalogServiceTrait + Send + Sync>;

/// Multi-step workflows that span products, their category links and price tiers.
#[async_trait]
pub trait ProductCatalogServiceTrait {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ServiceError>;
    async fn update_product(&self, req: &UpdateProductRequest) -> Result<Product, ServiceError>;
    async fn product_detail(&self, id: i64) -> Result<ProductDetailResponse, ServiceError>;
    /// Deletes the product; its category links are cleaned up in the background.
    async fn delete_product(&self, id: i64) -> Result<(), ServiceError>;
    /// Deletes the category; links pointing at it are cleaned up in the background.
    async fn delete_category(&self, id: i64) -> Result<(), ServiceError>;
}
