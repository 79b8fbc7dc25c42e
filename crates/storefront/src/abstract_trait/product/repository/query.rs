use crate::model::Product;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Page of products whose name or SKU contains `query`, plus the total match count.
    /// An empty `query` matches everything.
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
}
