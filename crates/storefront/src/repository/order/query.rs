use crate::{abstract_trait::order::repository::OrderQueryRepositoryTrait, model::Order};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!("📋 Listing orders offset={offset} limit={limit}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, product_id, amount, price, status, created
            FROM orders
            ORDER BY created
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to list orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        let found: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM orders")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count orders: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok((orders, found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Order, RepositoryError> {
        info!("🆔 Fetching order by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let order = sqlx::query_as::<_, Order>(
            "SELECT id, product_id, amount, price, status, created FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        order.ok_or(RepositoryError::NotFound)
    }
}
