use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductCatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductEntity;

pub struct ProductCatalogRepositoryPostgres {
    pool: PgPool,
}

impl ProductCatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalogRepository for ProductCatalogRepositoryPostgres {
    async fn get_products_by_category(
        &self,
        category_external_id: Uuid,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, category_id, suggested_price_min, suggested_price_max, popularity_score, verified FROM products WHERE category_id = $1 AND verified = TRUE ORDER BY name ASC",
        )
        .bind(category_external_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
