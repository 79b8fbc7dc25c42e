use crate::{
    abstract_trait::category::{
        repository::{DynCategoryCommandRepository, DynCategoryQueryRepository},
        service::CategoryServiceTrait,
    },
    model::Category,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{domain::Nullable, errors::ServiceError, utils::ContextTimeout};
use tracing::info;

#[derive(Clone)]
pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
    timeout: ContextTimeout,
}

impl CategoryService {
    pub fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        timeout: ContextTimeout,
    ) -> Self {
        Self {
            query,
            command,
            timeout,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Category>, i64), ServiceError> {
        self.timeout
            .scope()
            .run(self.query.search(query, offset, limit))
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Category, ServiceError> {
        self.timeout.scope().run(self.query.find_by_id(id)).await
    }

    async fn create(&self, category: &mut Category) -> Result<(), ServiceError> {
        self.timeout.scope().run(self.command.create(category)).await
    }

    async fn update(&self, category: &mut Category) -> Result<(), ServiceError> {
        category.updated = Nullable::Value(Utc::now());
        self.timeout.scope().run(self.command.update(category)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.timeout
            .scope()
            .run(async {
                self.query.find_by_id(id).await?;
                self.command.delete(id).await
            })
            .await?;

        info!("🗑️ Category {id} deleted");
        Ok(())
    }
}
