use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::combination::repository::CombinationRepository;
use crate::domain::combination::use_cases::get_by_menu::{
    GetCombinationsParams, GetCombinationsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCombinationsUseCaseImpl {
    pub repository: Arc<dyn CombinationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCombinationsUseCase for GetCombinationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetCombinationsParams,
    ) -> Result<Vec<GeneratedCombination>, CombinationError> {
        self.logger.info(&format!(
            "Fetching combinations of menu {}",
            params.daily_menu_id
        ));
        let combinations = self
            .repository
            .get_by_menu(params.daily_menu_id, &params.restaurant_id)
            .await?;
        self.logger
            .info(&format!("Found {} combinations", combinations.len()));
        Ok(combinations)
    }
}
