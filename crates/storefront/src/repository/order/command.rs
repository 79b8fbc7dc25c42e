use crate::{abstract_trait::order::repository::OrderCommandRepositoryTrait, model::Order};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(&self, order: &mut Order) -> Result<(), RepositoryError> {
        info!(
            "🆕 Creating order for product {} amount={}",
            order.product_id, order.amount
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (id, created): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO orders (product_id, amount, price, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created
            "#,
        )
        .bind(order.product_id)
        .bind(order.amount)
        .bind(order.price)
        .bind(order.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create order: {:?}", e);
            RepositoryError::from(e)
        })?;

        order.id = id;
        order.created = created;

        info!("✅ Order created with ID: {id}");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting order ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        RepositoryError::expect_single_row(result.rows_affected())
    }
}
