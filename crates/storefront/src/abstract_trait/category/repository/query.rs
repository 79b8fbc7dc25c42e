use crate::model::Category;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Category>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
}
