use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::{CombinationFlag, CombinationPatch, GeneratedCombination};

/// Combinations are always reached through a menu owned by the restaurant.
#[async_trait]
pub trait CombinationRepository: Send + Sync {
    async fn get_by_menu(
        &self,
        daily_menu_id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<GeneratedCombination>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<GeneratedCombination, RepositoryError>;
    /// Writes only the columns the patch carries and returns the stored row.
    async fn update_fields(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        patch: &CombinationPatch,
    ) -> Result<GeneratedCombination, RepositoryError>;
    /// Flips one flag in storage; the other flag keeps whatever value is stored.
    async fn toggle_flag(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        flag: CombinationFlag,
    ) -> Result<GeneratedCombination, RepositoryError>;
    /// Fails with `NotFound` when no row was removed.
    async fn delete(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<(), RepositoryError>;
}
