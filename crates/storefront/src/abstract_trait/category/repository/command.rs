use crate::model::Category;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create(&self, category: &mut Category) -> Result<(), RepositoryError>;
    /// An absent `parent_id` leaves the stored parent untouched.
    async fn update(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
