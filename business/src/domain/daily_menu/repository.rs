use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::{DailyMenu, MenuComposition, MenuSelection, PersistedProteinQuantity};

#[async_trait]
pub trait DailyMenuRepository: Send + Sync {
    async fn find_active(
        &self,
        restaurant_id: &RestaurantId,
        menu_date: NaiveDate,
    ) -> Result<Option<DailyMenu>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<DailyMenu, RepositoryError>;
    async fn get_selections(&self, daily_menu_id: Uuid)
    -> Result<Vec<MenuSelection>, RepositoryError>;
    async fn get_protein_quantities(
        &self,
        daily_menu_id: Uuid,
    ) -> Result<Vec<PersistedProteinQuantity>, RepositoryError>;
    /// Writes menu, selections, protein quantities and combinations as one unit.
    ///
    /// Any previously active menu of the same restaurant and date becomes inactive in the
    /// same unit. Implementations must persist all of it or nothing.
    async fn save_composition(&self, composition: &MenuComposition)
    -> Result<(), RepositoryError>;
}
