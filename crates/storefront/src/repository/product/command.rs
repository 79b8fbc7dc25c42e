use crate::{abstract_trait::product::repository::ProductCommandRepositoryTrait, model::Product};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError> {
        info!("🆕 Creating product: {} ({})", product.name, product.sku);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (id, created): (i64, DateTime<Utc>) = sqlx::query_as(
            "INSERT INTO products (name, sku) VALUES ($1, $2) RETURNING id, created",
        )
        .bind(&product.name)
        .bind(&product.sku)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {:?}", e);
            RepositoryError::from(e)
        })?;

        product.id = id;
        product.created = created;

        info!("✅ Product created with ID: {id}");
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        info!("🔄 Updating product ID: {}", product.id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, sku = $2, updated = COALESCE($3, CURRENT_TIMESTAMP)
            WHERE id = $4
            "#,
        )
        .bind(&product.name)
        .bind(&product.sku)
        .bind(product.updated.as_option().copied())
        .bind(product.id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {}: {:?}", product.id, e);
            RepositoryError::from(e)
        })?;

        RepositoryError::expect_single_row(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        RepositoryError::expect_single_row(result.rows_affected())
    }
}
