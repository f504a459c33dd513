use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::combination::repository::CombinationRepository;
use crate::domain::combination::use_cases::toggle_flag::{
    ToggleCombinationFlagParams, ToggleCombinationFlagUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ToggleCombinationFlagUseCaseImpl {
    pub repository: Arc<dyn CombinationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleCombinationFlagUseCase for ToggleCombinationFlagUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleCombinationFlagParams,
    ) -> Result<GeneratedCombination, CombinationError> {
        self.logger.info(&format!(
            "Toggling {} on combination {}",
            params.flag, params.id
        ));

        self.repository
            .toggle_flag(params.id, &params.restaurant_id, params.flag)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CombinationError::NotFound,
                other => CombinationError::Repository(other),
            })
    }
}
