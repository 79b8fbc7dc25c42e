use crate::model::Product;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, ServiceError>;
    async fn create(&self, product: &mut Product) -> Result<(), ServiceError>;
    async fn update(&self, product: &mut Product) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
    /// Products found among the two ids; lookups that fail are left out.
    async fn compare(&self, first: i64, second: i64) -> Vec<Product>;
}
