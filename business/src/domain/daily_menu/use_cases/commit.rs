use async_trait::async_trait;

use crate::domain::combination::model::GeneratedCombination;
use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::model::DailyMenu;
use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
use crate::domain::shared::value_objects::RestaurantId;
use crate::domain::template::model::MenuTemplate;

pub struct CommitMenuParams {
    pub restaurant_id: RestaurantId,
    pub selection: Selection,
    pub protein_quantities: ProteinQuantities,
    pub menu_price: f64,
    /// Also saves the selection as a reusable template under this name.
    pub template_name: Option<String>,
    /// `false` persists the selection without expanding combinations.
    pub generate_combinations: bool,
}

#[derive(Debug, Clone)]
pub enum TemplateOutcome {
    NotRequested,
    Saved(MenuTemplate),
    /// The menu was committed; only the template write failed.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CommittedMenu {
    pub menu: DailyMenu,
    pub combinations: Vec<GeneratedCombination>,
    pub template: TemplateOutcome,
}

#[async_trait]
pub trait CommitMenuUseCase: Send + Sync {
    async fn execute(&self, params: CommitMenuParams) -> Result<CommittedMenu, MenuError>;
}
