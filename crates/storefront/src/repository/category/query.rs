use crate::{
    abstract_trait::category::repository::CategoryQueryRepositoryTrait, model::Category,
    repository::like_pattern,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        info!("🔍 Searching categories query={query:?} offset={offset} limit={limit}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let pattern = like_pattern(query);

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, parent_id, created, updated
            FROM categories
            WHERE ($1::TEXT IS NULL OR LOWER(name) LIKE $1)
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
            error!("❌ Failed to search categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        let found: i64 = sqlx::query_scalar(
            "SELECT COUNT(id) FROM categories WHERE ($1::TEXT IS NULL OR LOWER(name) LIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((categories, found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        info!("🆔 Fetching category by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, parent_id, created, updated FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        category.ok_or(RepositoryError::NotFound)
    }
}
