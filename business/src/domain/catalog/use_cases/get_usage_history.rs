use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::UsageHistory;
use crate::domain::shared::value_objects::RestaurantId;

pub struct GetUsageHistoryParams {
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetUsageHistoryUseCase: Send + Sync {
    async fn execute(&self, params: GetUsageHistoryParams) -> Result<UsageHistory, CatalogError>;
}
