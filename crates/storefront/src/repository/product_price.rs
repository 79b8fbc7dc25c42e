use crate::{abstract_trait::product_price::ProductPriceRepositoryTrait, model::ProductPrice};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductPriceRepository {
    db: ConnectionPool,
}

impl ProductPriceRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductPriceRepositoryTrait for ProductPriceRepository {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductPrice>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query_as::<_, ProductPrice>(
            "SELECT id, amount, price, product_id FROM product_price WHERE product_id = $1 ORDER BY amount",
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch prices of product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_amount(
        &self,
        product_id: i64,
        amount: i64,
    ) -> Result<ProductPrice, RepositoryError> {
        info!("💲 Looking up price of product {product_id} for amount {amount}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let price = sqlx::query_as::<_, ProductPrice>(
            r#"
            SELECT id, amount, price, product_id
            FROM product_price
            WHERE product_id = $1 AND amount < $2
            ORDER BY amount DESC
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .bind(amount)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up price of product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        price.ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, price: &mut ProductPrice) -> Result<(), RepositoryError> {
        info!(
            "💲 Adding price tier for product {}: amount>{} price={}",
            price.product_id, price.amount, price.price
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_price (amount, price, product_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(price.amount)
        .bind(price.price)
        .bind(price.product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create price tier: {:?}", e);
            RepositoryError::from(e)
        })?;

        price.id = id;
        Ok(())
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError> {
        info!("🧹 Removing price tiers of product {product_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM product_price WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to remove prices of product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
