use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
use crate::domain::shared::value_objects::RestaurantId;

pub struct GetMenuSelectionParams {
    pub daily_menu_id: Uuid,
    pub restaurant_id: RestaurantId,
}

/// Selection re-seeded from the persisted rows of a menu.
#[derive(Debug, Clone)]
pub struct MenuSelectionSnapshot {
    pub selection: Selection,
    pub protein_quantities: ProteinQuantities,
    pub menu_price: f64,
}

#[async_trait]
pub trait GetMenuSelectionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetMenuSelectionParams,
    ) -> Result<MenuSelectionSnapshot, MenuError>;
}
