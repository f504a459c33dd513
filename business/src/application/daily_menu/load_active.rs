use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::combination::repository::CombinationRepository;
use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::model::LoadedMenu;
use crate::domain::daily_menu::repository::DailyMenuRepository;
use crate::domain::daily_menu::use_cases::load_active::{
    LoadActiveMenuParams, LoadActiveMenuUseCase,
};
use crate::domain::logger::Logger;

pub struct LoadActiveMenuUseCaseImpl {
    pub repository: Arc<dyn DailyMenuRepository>,
    pub combination_repository: Arc<dyn CombinationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadActiveMenuUseCase for LoadActiveMenuUseCaseImpl {
    async fn execute(&self, params: LoadActiveMenuParams) -> Result<Option<LoadedMenu>, MenuError> {
        let today = Utc::now().date_naive();
        self.logger.info(&format!(
            "Loading active menu for restaurant {} on {}",
            params.restaurant_id, today
        ));

        let Some(menu) = self
            .repository
            .find_active(&params.restaurant_id, today)
            .await?
        else {
            self.logger.info("No active menu for today");
            return Ok(None);
        };

        let selections = self.repository.get_selections(menu.id).await?;
        let protein_quantities = self.repository.get_protein_quantities(menu.id).await?;
        let combinations = self
            .combination_repository
            .get_by_menu(menu.id, &params.restaurant_id)
            .await?;

        self.logger.info(&format!(
            "Active menu {} has {} selections and {} combinations",
            menu.id,
            selections.len(),
            combinations.len()
        ));
        Ok(Some(LoadedMenu {
            menu,
            selections,
            protein_quantities,
            combinations,
        }))
    }
}
