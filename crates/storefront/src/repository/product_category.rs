use crate::{
    abstract_trait::product_category::ProductCategoryRepositoryTrait, model::ProductCategory,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCategoryRepository {
    db: ConnectionPool,
}

impl ProductCategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCategoryRepositoryTrait for ProductCategoryRepository {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query_as::<_, ProductCategory>(
            "SELECT id, product_id, category_id FROM product_category WHERE product_id = $1 ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch links of product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query_as::<_, ProductCategory>(
            "SELECT id, product_id, category_id FROM product_category WHERE category_id = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch links of category {category_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn create(&self, link: &mut ProductCategory) -> Result<(), RepositoryError> {
        info!(
            "🔗 Linking product {} to category {}",
            link.product_id, link.category_id
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_category (product_id, category_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(link.product_id)
        .bind(link.category_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product category link: {:?}", e);
            RepositoryError::from(e)
        })?;

        link.id = id;
        Ok(())
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError> {
        info!("🧹 Removing category links of product {product_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM product_category WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to remove links of product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_by_category_id(&self, category_id: i64) -> Result<u64, RepositoryError> {
        info!("🧹 Removing product links of category {category_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM product_category WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to remove links of category {category_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
