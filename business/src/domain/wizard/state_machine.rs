use std::time::Duration;

use crate::domain::category::model::{MenuCategory, WizardStep};
use crate::domain::confirmation::{CONFIRM_DISCARD_CHANGES, Confirmation};
use crate::domain::daily_menu::model::is_valid_price;
use crate::domain::daily_menu::selection::Selection;

/// Delay between the visibility flag and the animation flag.
pub const DEFAULT_ANIMATION_DELAY: Duration = Duration::from_millis(50);

/// Step cursor and visibility of the menu composition wizard.
///
/// Every category step requires at least one product before advancing, including the
/// categories the generator treats as optional.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    visible: bool,
    animating: bool,
    animation_delay: Duration,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_animation_delay(DEFAULT_ANIMATION_DELAY)
    }

    pub fn with_animation_delay(animation_delay: Duration) -> Self {
        Self {
            step: WizardStep::FIRST,
            visible: false,
            animating: false,
            animation_delay,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn current_category(&self) -> Option<MenuCategory> {
        self.step.category()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_final_step(&self) -> bool {
        self.step == WizardStep::FinalConfiguration
    }

    pub fn can_continue(&self, selection: &Selection, menu_price: f64) -> bool {
        match self.step {
            WizardStep::Category(category) => selection.count(category) > 0,
            WizardStep::FinalConfiguration => {
                selection.count(MenuCategory::Principios) > 0
                    && selection.count(MenuCategory::Proteinas) > 0
                    && is_valid_price(menu_price)
            }
        }
    }

    /// Advances one step. No-op returning `false` when gated or on the last step.
    pub fn next(&mut self, selection: &Selection, menu_price: f64) -> bool {
        if !self.can_continue(selection, menu_price) {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub async fn open(&mut self) {
        self.visible = true;
        tokio::time::sleep(self.animation_delay).await;
        self.animating = true;
    }

    /// Closes the wizard, asking first when there are unsaved changes.
    /// Returns `false` when the operator declines; the wizard then stays open.
    pub async fn close(&mut self, has_unsaved_changes: bool, confirmation: &dyn Confirmation) -> bool {
        if has_unsaved_changes && !confirmation.confirm(CONFIRM_DISCARD_CHANGES).await {
            return false;
        }
        self.animating = false;
        tokio::time::sleep(self.animation_delay).await;
        self.visible = false;
        true
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::FIRST;
        self.visible = false;
        self.animating = false;
    }
}
