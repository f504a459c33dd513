use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::model::{CombinationPatch, GeneratedCombination};
use crate::domain::shared::value_objects::RestaurantId;

pub struct UpdateCombinationParams {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub patch: CombinationPatch,
}

#[async_trait]
pub trait UpdateCombinationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCombinationParams,
    ) -> Result<GeneratedCombination, CombinationError>;
}
