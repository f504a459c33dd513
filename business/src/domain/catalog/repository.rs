use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::{Product, UsageRecord};

#[async_trait]
pub trait ProductCatalogRepository: Send + Sync {
    /// Verified products of one catalog category, ordered by name.
    async fn get_products_by_category(
        &self,
        category_external_id: Uuid,
    ) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
pub trait UsageHistoryRepository: Send + Sync {
    async fn get_product_usage_history(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<UsageRecord>, RepositoryError>;
}
