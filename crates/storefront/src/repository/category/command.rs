use crate::{
    abstract_trait::category::repository::CategoryCommandRepositoryTrait, model::Category,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create(&self, category: &mut Category) -> Result<(), RepositoryError> {
        info!("🆕 Creating category: {}", category.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (id, created): (i64, DateTime<Utc>) = sqlx::query_as(
            "INSERT INTO categories (name, parent_id) VALUES ($1, $2) RETURNING id, created",
        )
        .bind(&category.name)
        .bind(category.parent_id.as_option().copied())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category: {:?}", e);
            RepositoryError::from(e)
        })?;

        category.id = id;
        category.created = created;

        info!("✅ Category created with ID: {id}");
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        info!("🔄 Updating category ID: {}", category.id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $1,
                parent_id = CASE WHEN $2 THEN $3 ELSE parent_id END,
                updated = COALESCE($4, CURRENT_TIMESTAMP)
            WHERE id = $5
            "#,
        )
        .bind(&category.name)
        .bind(!category.parent_id.is_absent())
        .bind(category.parent_id.as_option().copied())
        .bind(category.updated.as_option().copied())
        .bind(category.id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update category {}: {:?}", category.id, e);
            RepositoryError::from(e)
        })?;

        RepositoryError::expect_single_row(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting category ID: {id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        RepositoryError::expect_single_row(result.rows_affected())
    }
}
