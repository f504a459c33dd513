use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::combination::errors::CombinationError;
use crate::domain::shared::value_objects::RestaurantId;

pub struct DeleteCombinationParams {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait DeleteCombinationUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCombinationParams) -> Result<(), CombinationError>;
}
