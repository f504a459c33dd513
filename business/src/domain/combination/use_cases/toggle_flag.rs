use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::combination::errors::CombinationError;
pub use crate::domain::combination::model::CombinationFlag;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::shared::value_objects::RestaurantId;

pub struct ToggleCombinationFlagParams {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub flag: CombinationFlag,
}

#[async_trait]
pub trait ToggleCombinationFlagUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ToggleCombinationFlagParams,
    ) -> Result<GeneratedCombination, CombinationError>;
}
