use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::shared::value_objects::RestaurantId;

pub struct GetCombinationsParams {
    pub daily_menu_id: Uuid,
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetCombinationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCombinationsParams,
    ) -> Result<Vec<GeneratedCombination>, CombinationError>;
}
