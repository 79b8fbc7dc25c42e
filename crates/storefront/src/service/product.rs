use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductServiceTrait,
    },
    model::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{domain::Nullable, errors::ServiceError, utils::ContextTimeout};
use tracing::{info, warn};

#[derive(Clone)]
pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    timeout: ContextTimeout,
}

impl ProductService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
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
impl ProductServiceTrait for ProductService {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), ServiceError> {
        self.timeout
            .scope()
            .run(self.query.search(query, offset, limit))
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, ServiceError> {
        self.timeout.scope().run(self.query.find_by_id(id)).await
    }

    async fn create(&self, product: &mut Product) -> Result<(), ServiceError> {
        self.timeout.scope().run(self.command.create(product)).await
    }

    async fn update(&self, product: &mut Product) -> Result<(), ServiceError> {
        product.updated = Nullable::Value(Utc::now());
        self.timeout.scope().run(self.command.update(product)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.timeout
            .scope()
            .run(async {
                self.query.find_by_id(id).await?;
                self.command.delete(id).await
            })
            .await?;

        info!("🗑️ Product {id} deleted");
        Ok(())
    }

    async fn compare(&self, first: i64, second: i64) -> Vec<Product> {
        let deadline = self.timeout.scope();
        let mut products = Vec::with_capacity(2);

        for id in [first, second] {
            match deadline.run(self.query.find_by_id(id)).await {
                Ok(product) => products.push(product),
                Err(e) => warn!("⚠️ Leaving product {id} out of comparison: {e}"),
            }
        }

        products
    }
}
