use std::sync::Arc;

use uuid::Uuid;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::use_cases::get_by_category::GetProductsByCategoryUseCase;
use crate::domain::catalog::use_cases::get_usage_history::GetUsageHistoryUseCase;
use crate::domain::category::model::MenuCategory;
use crate::domain::combination::use_cases::delete::DeleteCombinationUseCase;
use crate::domain::combination::use_cases::get_by_menu::GetCombinationsUseCase;
use crate::domain::combination::use_cases::toggle_flag::ToggleCombinationFlagUseCase;
use crate::domain::combination::use_cases::update::UpdateCombinationUseCase;
use crate::domain::confirmation::Confirmation;
use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
use crate::domain::daily_menu::use_cases::commit::CommitMenuUseCase;
use crate::domain::daily_menu::use_cases::get_selection::GetMenuSelectionUseCase;
use crate::domain::daily_menu::use_cases::load_active::LoadActiveMenuUseCase;
use crate::domain::logger::Logger;
use crate::domain::notification::NotificationChannel;
use crate::domain::template::use_cases::create::CreateMenuTemplateUseCase;
use crate::domain::template::use_cases::get_all::GetMenuTemplatesUseCase;

/// Which screen of the menu page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerView {
    /// No combinations yet: the operator composes a menu.
    Creation,
    /// Generated combinations of the loaded menu.
    Combinations,
    /// Raw selected products before or after generation.
    Configuration,
}

/// Outstanding store operations, used to disable the matching controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingOperation {
    Saving,
    Generating,
    Updating(Uuid),
    Deleting(Uuid),
}

/// One row of the configuration table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationItem {
    pub category: MenuCategory,
    pub product: Product,
    pub price: f64,
    /// Only proteínas carry a planned quantity.
    pub planned_quantity: Option<u32>,
}

/// Last state known to be persisted, restored when unsaved changes are discarded.
#[derive(Debug, Clone, Default)]
pub(super) struct PersistedSnapshot {
    pub selection: Selection,
    pub protein_quantities: ProteinQuantities,
    pub menu_price: f64,
}

pub struct ComposerDependencies {
    pub get_products: Arc<dyn GetProductsByCategoryUseCase>,
    pub get_usage_history: Arc<dyn GetUsageHistoryUseCase>,
    pub load_active_menu: Arc<dyn LoadActiveMenuUseCase>,
    pub commit_menu: Arc<dyn CommitMenuUseCase>,
    pub get_menu_selection: Arc<dyn GetMenuSelectionUseCase>,
    pub get_combinations: Arc<dyn GetCombinationsUseCase>,
    pub update_combination: Arc<dyn UpdateCombinationUseCase>,
    pub toggle_combination_flag: Arc<dyn ToggleCombinationFlagUseCase>,
    pub delete_combination: Arc<dyn DeleteCombinationUseCase>,
    pub create_template: Arc<dyn CreateMenuTemplateUseCase>,
    pub get_templates: Arc<dyn GetMenuTemplatesUseCase>,
    pub notifications: Arc<dyn NotificationChannel>,
    pub confirmation: Arc<dyn Confirmation>,
    pub logger: Arc<dyn Logger>,
}
