use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::UsageHistory;
use crate::domain::catalog::repository::UsageHistoryRepository;
use crate::domain::catalog::use_cases::get_usage_history::{
    GetUsageHistoryParams, GetUsageHistoryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetUsageHistoryUseCaseImpl {
    pub repository: Arc<dyn UsageHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUsageHistoryUseCase for GetUsageHistoryUseCaseImpl {
    async fn execute(&self, params: GetUsageHistoryParams) -> Result<UsageHistory, CatalogError> {
        self.logger.debug(&format!(
            "Fetching usage history for restaurant {}",
            params.restaurant_id
        ));

        let records = self
            .repository
            .get_product_usage_history(&params.restaurant_id)
            .await?;
        let total = records.len();
        let history = UsageHistory::from_records(records);

        self.logger
            .info(&format!("Loaded {} usage records", total));
        Ok(history)
    }
}
