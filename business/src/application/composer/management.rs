use uuid::Uuid;

use super::state::{ComposerView, PendingOperation};
use super::store::MenuComposer;
use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::filter::CombinationFilter;
use crate::domain::combination::model::{CombinationPatch, GeneratedCombination};
use crate::domain::combination::use_cases::delete::DeleteCombinationParams;
use crate::domain::combination::use_cases::get_by_menu::GetCombinationsParams;
use crate::domain::combination::use_cases::toggle_flag::{
    CombinationFlag, ToggleCombinationFlagParams,
};
use crate::domain::combination::use_cases::update::UpdateCombinationParams;
use crate::domain::confirmation::CONFIRM_DELETE_COMBINATION;
use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::use_cases::get_selection::GetMenuSelectionParams;

pub const COMBINATION_UPDATED: &str = "combination.updated";
pub const COMBINATION_DELETED: &str = "combination.deleted";
pub const FAVORITE_TOGGLED: &str = "combination.favorite_toggled";
pub const SPECIAL_TOGGLED: &str = "combination.special_toggled";

impl MenuComposer {
    pub fn list(&self, filter: &CombinationFilter) -> Vec<GeneratedCombination> {
        filter.apply(&self.combinations)
    }

    /// Re-reads the combinations of the loaded menu. Keeps the in-memory list on failure.
    pub async fn refresh_combinations(&mut self) -> Result<(), CombinationError> {
        let Some(daily_menu_id) = self.menu.as_ref().map(|m| m.id) else {
            self.combinations.clear();
            return Ok(());
        };
        let combinations = self
            .deps
            .get_combinations
            .execute(GetCombinationsParams {
                daily_menu_id,
                restaurant_id: self.restaurant_id,
            })
            .await
            .inspect_err(|e| {
                self.deps
                    .logger
                    .error(&format!("Failed to refresh combinations: {}", e))
            })?;
        self.combinations = combinations;
        Ok(())
    }

    pub async fn edit(
        &mut self,
        id: Uuid,
        patch: CombinationPatch,
    ) -> Result<GeneratedCombination, CombinationError> {
        let operation = PendingOperation::Updating(id);
        self.pending.insert(operation);
        let result = self
            .deps
            .update_combination
            .execute(UpdateCombinationParams {
                id,
                restaurant_id: self.restaurant_id,
                patch,
            })
            .await;
        self.pending.remove(&operation);
        self.settle(result, COMBINATION_UPDATED).await
    }

    pub async fn toggle_favorite(&mut self, id: Uuid) -> Result<GeneratedCombination, CombinationError> {
        self.toggle_flag(id, CombinationFlag::Favorite).await
    }

    pub async fn toggle_special(&mut self, id: Uuid) -> Result<GeneratedCombination, CombinationError> {
        self.toggle_flag(id, CombinationFlag::Special).await
    }

    async fn toggle_flag(
        &mut self,
        id: Uuid,
        flag: CombinationFlag,
    ) -> Result<GeneratedCombination, CombinationError> {
        let operation = PendingOperation::Updating(id);
        self.pending.insert(operation);
        let result = self
            .deps
            .toggle_combination_flag
            .execute(ToggleCombinationFlagParams {
                id,
                restaurant_id: self.restaurant_id,
                flag,
            })
            .await;
        self.pending.remove(&operation);
        let message = match flag {
            CombinationFlag::Favorite => FAVORITE_TOGGLED,
            CombinationFlag::Special => SPECIAL_TOGGLED,
        };
        self.settle(result, message).await
    }

    async fn settle(
        &mut self,
        result: Result<GeneratedCombination, CombinationError>,
        success_message: &str,
    ) -> Result<GeneratedCombination, CombinationError> {
        match result {
            Ok(updated) => {
                if let Some(slot) = self.combinations.iter_mut().find(|c| c.id == updated.id) {
                    *slot = updated.clone();
                }
                self.notify_success(success_message);
                Ok(updated)
            }
            Err(e) => {
                self.notify_error(&e.to_string());
                let _ = self.refresh_combinations().await;
                Err(e)
            }
        }
    }

    /// Deletes a combination after the operator confirms.
    /// Returns `Ok(false)` when the operator declines; nothing is deleted then.
    pub async fn remove(&mut self, id: Uuid) -> Result<bool, CombinationError> {
        if !self
            .deps
            .confirmation
            .confirm(CONFIRM_DELETE_COMBINATION)
            .await
        {
            self.deps
                .logger
                .debug(&format!("Deletion of combination {} cancelled", id));
            return Ok(false);
        }

        let operation = PendingOperation::Deleting(id);
        self.pending.insert(operation);
        let result = self
            .deps
            .delete_combination
            .execute(DeleteCombinationParams {
                id,
                restaurant_id: self.restaurant_id,
            })
            .await;
        self.pending.remove(&operation);

        match result {
            Ok(()) => {
                self.combinations.retain(|c| c.id != id);
                self.notify_success(COMBINATION_DELETED);
                Ok(true)
            }
            Err(e) => {
                self.notify_error(&e.to_string());
                let _ = self.refresh_combinations().await;
                Err(e)
            }
        }
    }

    /// Re-seeds the selection from the loaded menu's persisted rows and reopens the wizard
    /// at the first step. Existing combinations are left as they are.
    pub async fn re_edit_full_menu(&mut self) -> Result<(), MenuError> {
        let Some(daily_menu_id) = self.menu.as_ref().map(|m| m.id) else {
            self.notify_error(&MenuError::NoMenuLoaded.to_string());
            return Err(MenuError::NoMenuLoaded);
        };
        let snapshot = match self
            .deps
            .get_menu_selection
            .execute(GetMenuSelectionParams {
                daily_menu_id,
                restaurant_id: self.restaurant_id,
            })
            .await
        {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.notify_error(&e.to_string());
                return Err(e);
            }
        };

        self.selection = snapshot.selection;
        self.protein_quantities = snapshot.protein_quantities;
        self.menu_price = snapshot.menu_price;
        self.dirty = false;
        self.remember_persisted();
        self.view = ComposerView::Creation;
        self.wizard.reset();
        self.open_wizard().await;
        Ok(())
    }
}
