use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::repository::DailyMenuRepository;
use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
use crate::domain::daily_menu::use_cases::get_selection::{
    GetMenuSelectionParams, GetMenuSelectionUseCase, MenuSelectionSnapshot,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetMenuSelectionUseCaseImpl {
    pub repository: Arc<dyn DailyMenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMenuSelectionUseCase for GetMenuSelectionUseCaseImpl {
    async fn execute(
        &self,
        params: GetMenuSelectionParams,
    ) -> Result<MenuSelectionSnapshot, MenuError> {
        self.logger
            .info(&format!("Rebuilding selection of menu {}", params.daily_menu_id));

        // Ownership check before reading child rows
        let menu = self
            .repository
            .get_by_id(params.daily_menu_id, &params.restaurant_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MenuError::NotFound,
                other => MenuError::Repository(other),
            })?;

        let rows = self.repository.get_selections(menu.id).await?;
        let quantities = self.repository.get_protein_quantities(menu.id).await?;

        let selection = Selection::from_rows(&rows);
        if selection.total() < rows.len() {
            self.logger.warn(&format!(
                "Skipped {} selection rows with unknown category in menu {}",
                rows.len() - selection.total(),
                menu.id
            ));
        }

        Ok(MenuSelectionSnapshot {
            selection,
            protein_quantities: ProteinQuantities::from_rows(&quantities),
            menu_price: menu.menu_price,
        })
    }
}
