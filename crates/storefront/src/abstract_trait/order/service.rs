use crate::model::Order;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(&self, offset: i64, limit: i64) -> Result<(Vec<Order>, i64), ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Order, ServiceError>;
    async fn create(&self, order: &mut Order) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
