use async_trait::async_trait;

use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::model::LoadedMenu;
use crate::domain::shared::value_objects::RestaurantId;

pub struct LoadActiveMenuParams {
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait LoadActiveMenuUseCase: Send + Sync {
    /// Today's active menu with its selections, quantities and combinations, if any.
    async fn execute(&self, params: LoadActiveMenuParams) -> Result<Option<LoadedMenu>, MenuError>;
}
