use crate::model::Category;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Category>, i64), ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Category, ServiceError>;
    async fn create(&self, category: &mut Category) -> Result<(), ServiceError>;
    async fn update(&self, category: &mut Category) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
