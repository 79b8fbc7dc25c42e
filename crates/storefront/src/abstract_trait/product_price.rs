use crate::model::ProductPrice;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductPriceRepository = Arc<dyn ProductPriceRepositoryTrait + Send + Sync>;
pub type DynProductPriceService = Arc<dyn ProductPriceServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductPriceRepositoryTrait {
    async fn find_by_product_id(&self, product_id: i64)
    -> Result<Vec<ProductPrice>, RepositoryError>;
    /// The tier with the largest threshold strictly below `amount`.
    async fn find_by_amount(
        &self,
        product_id: i64,
        amount: i64,
    ) -> Result<ProductPrice, RepositoryError>;
    async fn create(&self, price: &mut ProductPrice) -> Result<(), RepositoryError>;
    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ProductPriceServiceTrait {
    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<ProductPrice>, ServiceError>;
    async fn find_by_amount(&self, product_id: i64, amount: i64)
    -> Result<ProductPrice, ServiceError>;
    async fn create(&self, price: &mut ProductPrice) -> Result<(), ServiceError>;
    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, ServiceError>;
}
