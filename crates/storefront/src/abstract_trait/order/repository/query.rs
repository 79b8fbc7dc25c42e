use crate::model::Order;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, offset: i64, limit: i64)
    -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Order, RepositoryError>;
}
