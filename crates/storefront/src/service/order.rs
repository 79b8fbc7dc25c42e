use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::OrderServiceTrait,
    },
    model::Order,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::ContextTimeout};
use tracing::info;

#[derive(Clone)]
pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    timeout: ContextTimeout,
}

impl OrderService {
    pub fn new(
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
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
impl OrderServiceTrait for OrderService {
    async fn find_all(&self, offset: i64, limit: i64) -> Result<(Vec<Order>, i64), ServiceError> {
        self.timeout
            .scope()
            .run(self.query.find_all(offset, limit))
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Order, ServiceError> {
        self.timeout.scope().run(self.query.find_by_id(id)).await
    }

    async fn create(&self, order: &mut Order) -> Result<(), ServiceError> {
        self.timeout.scope().run(self.command.create(order)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.timeout
            .scope()
            .run(async {
                self.query.find_by_id(id).await?;
                self.command.delete(id).await
            })
            .await?;

        info!("🗑️ Order {id} deleted");
        Ok(())
    }
}
