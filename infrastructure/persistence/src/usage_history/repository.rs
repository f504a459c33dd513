use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::UsageRecord;
use business::domain::catalog::repository::UsageHistoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RestaurantId;

use super::entity::UsageRecordEntity;

/// Read side of the usage history view maintained by the back-office.
pub struct UsageHistoryRepositoryPostgres {
    pool: PgPool,
}

impl UsageHistoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageHistoryRepository for UsageHistoryRepositoryPostgres {
    async fn get_product_usage_history(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<UsageRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, UsageRecordEntity>(
            "SELECT product_id, product_name, category_name, times_used, last_used_date, restaurant_price FROM product_usage_history WHERE restaurant_id = $1 ORDER BY times_used DESC, last_used_date DESC NULLS LAST",
        )
        .bind(restaurant_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
