use crate::model::ProductCategory;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductCategoryRepository = Arc<dyn ProductCategoryRepositoryTrait + Send + Sync>;
pub type DynProductCategoryService = Arc<dyn ProductCategoryServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCategoryRepositoryTrait {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError>;
    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError>;
    async fn create(&self, link: &mut ProductCategory) -> Result<(), RepositoryError>;
    /// Removes every link of the product and returns how many went away.
    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError>;
    async fn delete_by_category_id(&self, category_id: i64) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ProductCategoryServiceTrait {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductCategory>, ServiceError>;
    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductCategory>, ServiceError>;
    async fn create(&self, link: &mut ProductCategory) -> Result<(), ServiceError>;
    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, ServiceError>;
    async fn delete_by_category_id(&self, category_id: i64) -> Result<u64, ServiceError>;
}
