use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait, model::Product,
    repository::like_pattern,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Searching products query={query:?} offset={offset} limit={limit}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let pattern = like_pattern(query);

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, sku, created, updated
            FROM products
            WHERE ($1::TEXT IS NULL OR LOWER(name) LIKE $1 OR LOWER(sku) LIKE $1)
            ORDER BY created
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to search products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let found: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(id)
            FROM products
            WHERE ($1::TEXT IS NULL OR LOWER(name) LIKE $1 OR LOWER(sku) LIKE $1)
            "#,
        )
        .bind(&pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((products, found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, sku, created, updated FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }
}
