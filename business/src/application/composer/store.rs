use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::state::{
    ComposerDependencies, ComposerView, ConfigurationItem, PendingOperation, PersistedSnapshot,
};
use crate::domain::catalog::model::{DEFAULT_QUICK_PICKS, Product, UsageHistory, UsageRecord};
use crate::domain::catalog::use_cases::get_by_category::GetProductsByCategoryParams;
use crate::domain::catalog::use_cases::get_usage_history::GetUsageHistoryParams;
use crate::domain::category::model::{MenuCategory, WizardStep};
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::model::{DailyMenu, LoadedMenu};
use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
use crate::domain::daily_menu::use_cases::commit::{
    CommitMenuParams, CommittedMenu, TemplateOutcome,
};
use crate::domain::daily_menu::use_cases::load_active::LoadActiveMenuParams;
use crate::domain::notification::NotificationKind;
use crate::domain::session::SessionService;
use crate::domain::shared::value_objects::RestaurantId;
use crate::domain::template::errors::TemplateError;
use crate::domain::template::model::MenuTemplate;
use crate::domain::template::use_cases::create::CreateMenuTemplateParams;
use crate::domain::template::use_cases::get_all::GetMenuTemplatesParams;
use crate::domain::wizard::state_machine::Wizard;

pub const MENU_FINALIZED: &str = "menu.finalized";
pub const MENU_SAVED: &str = "menu.saved";
pub const TEMPLATE_SAVED: &str = "template.saved";

/// Composition state of one restaurant's menu page.
///
/// Holds the in-progress selection, the loaded daily menu and its combinations, and drives
/// the wizard. One instance serves one composing session; operations run one at a time.
pub struct MenuComposer {
    pub(super) restaurant_id: RestaurantId,
    pub(super) deps: ComposerDependencies,
    pub(super) wizard: Wizard,
    pub(super) selection: Selection,
    pub(super) protein_quantities: ProteinQuantities,
    pub(super) menu_price: f64,
    pub(super) menu: Option<DailyMenu>,
    pub(super) combinations: Vec<GeneratedCombination>,
    pub(super) view: ComposerView,
    pub(super) dirty: bool,
    pub(super) pending: HashSet<PendingOperation>,
    pub(super) product_cache: HashMap<MenuCategory, Vec<Product>>,
    pub(super) usage_history: UsageHistory,
    pub(super) persisted: PersistedSnapshot,
    pub(super) last_error: Option<String>,
}

impl MenuComposer {
    pub fn new(restaurant_id: RestaurantId, deps: ComposerDependencies, wizard: Wizard) -> Self {
        Self {
            restaurant_id,
            deps,
            wizard,
            selection: Selection::new(),
            protein_quantities: ProteinQuantities::new(),
            menu_price: 0.0,
            menu: None,
            combinations: Vec::new(),
            view: ComposerView::Creation,
            dirty: false,
            pending: HashSet::new(),
            product_cache: HashMap::new(),
            usage_history: UsageHistory::default(),
            persisted: PersistedSnapshot::default(),
            last_error: None,
        }
    }

    /// Resolves the restaurant of the current session. Fails fast when there is none.
    pub async fn connect(
        deps: ComposerDependencies,
        session: &dyn SessionService,
    ) -> Result<Self, MenuError> {
        let Some(restaurant_id) = session.get_user_restaurant().await else {
            deps.logger.error("No restaurant bound to the current session");
            return Err(MenuError::RestaurantMissing);
        };
        Ok(Self::new(restaurant_id, deps, Wizard::new()))
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn protein_quantities(&self) -> &ProteinQuantities {
        &self.protein_quantities
    }

    pub fn menu_price(&self) -> f64 {
        self.menu_price
    }

    pub fn menu(&self) -> Option<&DailyMenu> {
        self.menu.as_ref()
    }

    pub fn combinations(&self) -> &[GeneratedCombination] {
        &self.combinations
    }

    pub fn view(&self) -> ComposerView {
        self.view
    }

    pub fn set_view(&mut self, view: ComposerView) {
        self.view = view;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pending(&self, operation: PendingOperation) -> bool {
        self.pending.contains(&operation)
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Loads today's active menu and the usage history.
    ///
    /// Read failures are reported and leave an empty selection in creation view.
    pub async fn initialize(&mut self) {
        self.last_error = None;
        let loaded = self
            .deps
            .load_active_menu
            .execute(LoadActiveMenuParams {
                restaurant_id: self.restaurant_id,
            })
            .await;

        match loaded {
            Ok(Some(loaded)) => self.seed_from(loaded),
            Ok(None) => self.clear_composition(),
            Err(e) => {
                self.clear_composition();
                self.last_error = Some(e.to_string());
                self.notify_error(&e.to_string());
            }
        }

        match self
            .deps
            .get_usage_history
            .execute(GetUsageHistoryParams {
                restaurant_id: self.restaurant_id,
            })
            .await
        {
            Ok(history) => self.usage_history = history,
            Err(e) => {
                self.deps
                    .logger
                    .warn(&format!("Usage history unavailable: {}", e));
                self.usage_history = UsageHistory::default();
            }
        }
    }

    fn seed_from(&mut self, loaded: LoadedMenu) {
        self.selection = Selection::from_rows(&loaded.selections);
        self.protein_quantities = ProteinQuantities::from_rows(&loaded.protein_quantities);
        self.menu_price = loaded.menu.menu_price;
        self.view = if loaded.combinations.is_empty() {
            ComposerView::Creation
        } else {
            ComposerView::Combinations
        };
        self.deps.logger.info(&format!(
            "Seeded composer from menu {} ({} products)",
            loaded.menu.id,
            self.selection.total()
        ));
        self.menu = Some(loaded.menu);
        self.combinations = loaded.combinations;
        self.dirty = false;
        self.remember_persisted();
    }

    fn clear_composition(&mut self) {
        self.selection.clear();
        self.protein_quantities.clear();
        self.menu_price = 0.0;
        self.menu = None;
        self.combinations.clear();
        self.view = ComposerView::Creation;
        self.dirty = false;
        self.persisted = PersistedSnapshot::default();
    }

    pub(super) fn remember_persisted(&mut self) {
        self.persisted = PersistedSnapshot {
            selection: self.selection.clone(),
            protein_quantities: self.protein_quantities.clone(),
            menu_price: self.menu_price,
        };
    }

    fn restore_persisted(&mut self) {
        self.selection = self.persisted.selection.clone();
        self.protein_quantities = self.persisted.protein_quantities.clone();
        self.menu_price = self.persisted.menu_price;
        self.dirty = false;
    }

    // Selection mutations

    /// Adds the product if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle_product(&mut self, category: MenuCategory, product: Product) -> bool {
        let product_id = product.id;
        let selected = self.selection.toggle(category, product);
        if category == MenuCategory::Proteinas {
            if selected {
                self.protein_quantities.ensure_default(product_id);
            } else {
                self.protein_quantities.remove(product_id);
            }
        }
        self.dirty = true;
        selected
    }

    /// Toggles a product in the category of the current wizard step.
    pub fn toggle_in_current_step(&mut self, product: Product) -> bool {
        match self.wizard.current_category() {
            Some(category) => self.toggle_product(category, product),
            None => false,
        }
    }

    pub fn set_menu_price(&mut self, value: f64) {
        self.menu_price = value;
        self.dirty = true;
    }

    /// Plans a quantity for a selected proteína; clamped to at least one.
    /// Returns `false` when the product is not a selected proteína.
    pub fn set_protein_quantity(&mut self, product_id: Uuid, quantity: u32) -> bool {
        if !self.selection.contains(MenuCategory::Proteinas, product_id) {
            return false;
        }
        self.protein_quantities.set(product_id, quantity);
        self.dirty = true;
        true
    }

    // Catalog and quick picks

    pub fn products_for(&self, category: MenuCategory) -> &[Product] {
        self.product_cache
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fetches a category's catalog once per session. Failures are reported and retried
    /// on the next visit.
    pub async fn ensure_products_loaded(&mut self, category: MenuCategory) {
        if self.product_cache.contains_key(&category) {
            return;
        }
        match self
            .deps
            .get_products
            .execute(GetProductsByCategoryParams { category })
            .await
        {
            Ok(products) => {
                self.product_cache.insert(category, products);
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.notify_error(&e.to_string());
            }
        }
    }

    pub fn quick_picks(&self, category: MenuCategory) -> &[UsageRecord] {
        self.usage_history.quick_picks(category, DEFAULT_QUICK_PICKS)
    }

    /// Selects a previously used product, resolved against the current catalog.
    /// Returns `false` if the product is no longer listed or already selected.
    pub async fn quick_select(&mut self, category: MenuCategory, record: &UsageRecord) -> bool {
        self.ensure_products_loaded(category).await;
        let Some(product) = self
            .products_for(category)
            .iter()
            .find(|p| p.id == record.product_id)
            .cloned()
        else {
            self.deps.logger.warn(&format!(
                "Quick pick {} is no longer in the catalog",
                record.product_name
            ));
            return false;
        };
        if self.selection.contains(category, product.id) {
            return false;
        }
        self.toggle_product(category, product)
    }

    // Wizard

    pub fn can_continue(&self) -> bool {
        self.wizard.can_continue(&self.selection, self.menu_price)
    }

    pub async fn open_wizard(&mut self) {
        self.wizard.open().await;
        self.load_current_step().await;
    }

    pub async fn wizard_next(&mut self) -> bool {
        if !self.wizard.next(&self.selection, self.menu_price) {
            return false;
        }
        self.load_current_step().await;
        true
    }

    pub async fn wizard_prev(&mut self) -> bool {
        if !self.wizard.prev() {
            return false;
        }
        self.load_current_step().await;
        true
    }

    /// Closes the wizard, asking before discarding unsaved changes.
    /// On a confirmed discard the last persisted selection is restored.
    pub async fn close_wizard(&mut self) -> bool {
        let had_changes = self.dirty;
        let closed = self
            .wizard
            .close(had_changes, self.deps.confirmation.as_ref())
            .await;
        if closed && had_changes {
            self.restore_persisted();
            self.deps.logger.info("Discarded unsaved menu changes");
        }
        closed
    }

    async fn load_current_step(&mut self) {
        if let WizardStep::Category(category) = self.wizard.step() {
            self.ensure_products_loaded(category).await;
        }
    }

    // Page coordination

    /// Starts a brand-new menu: clears the composition and reopens the wizard at step 0.
    pub async fn create_new_menu(&mut self) {
        self.wizard.reset();
        self.clear_composition();
        self.deps.logger.info("Starting a new daily menu");
        self.open_wizard().await;
    }

    /// Validates, generates and commits the selection as today's active menu.
    pub async fn finalize(
        &mut self,
        template_name: Option<String>,
    ) -> Result<CommittedMenu, MenuError> {
        self.pending.insert(PendingOperation::Generating);
        let result = self.commit(template_name, true).await;
        self.pending.remove(&PendingOperation::Generating);

        let committed = result?;
        self.combinations = committed.combinations.clone();
        self.view = ComposerView::Combinations;
        self.wizard.close(false, self.deps.confirmation.as_ref()).await;
        self.notify_success(MENU_FINALIZED);
        Ok(committed)
    }

    /// Configuration view: persists the selection without generating combinations.
    pub async fn save_as_is(&mut self) -> Result<DailyMenu, MenuError> {
        self.pending.insert(PendingOperation::Saving);
        let result = self.commit(None, false).await;
        self.pending.remove(&PendingOperation::Saving);

        let committed = result?;
        self.combinations.clear();
        self.notify_success(MENU_SAVED);
        Ok(committed.menu)
    }

    async fn commit(
        &mut self,
        template_name: Option<String>,
        generate_combinations: bool,
    ) -> Result<CommittedMenu, MenuError> {
        let result = self
            .deps
            .commit_menu
            .execute(CommitMenuParams {
                restaurant_id: self.restaurant_id,
                selection: self.selection.clone(),
                protein_quantities: self.protein_quantities.clone(),
                menu_price: self.menu_price,
                template_name,
                generate_combinations,
            })
            .await;

        match result {
            Ok(committed) => {
                self.menu = Some(committed.menu.clone());
                self.dirty = false;
                self.remember_persisted();
                match &committed.template {
                    TemplateOutcome::Saved(_) => self.notify_success(TEMPLATE_SAVED),
                    TemplateOutcome::Failed(message) => self.notify_error(message),
                    TemplateOutcome::NotRequested => {}
                }
                Ok(committed)
            }
            Err(e) => {
                self.notify_error(&e.to_string());
                Err(e)
            }
        }
    }

    // Configuration view

    pub fn configuration_items(&self) -> Vec<ConfigurationItem> {
        self.selection
            .iter()
            .flat_map(|(category, products)| {
                products.iter().map(move |product| ConfigurationItem {
                    category,
                    product: product.clone(),
                    price: product.effective_price(),
                    planned_quantity: (category == MenuCategory::Proteinas)
                        .then(|| self.protein_quantities.get_or_default(product.id)),
                })
            })
            .collect()
    }

    pub fn remove_configuration_item(&mut self, category: MenuCategory, product_id: Uuid) -> bool {
        if !self.selection.remove(category, product_id) {
            return false;
        }
        if category == MenuCategory::Proteinas {
            self.protein_quantities.remove(product_id);
        }
        self.dirty = true;
        true
    }

    // Templates

    pub async fn save_template(&mut self, template_name: String) -> Result<MenuTemplate, TemplateError> {
        let result = self
            .deps
            .create_template
            .execute(CreateMenuTemplateParams {
                restaurant_id: self.restaurant_id,
                template_name,
                selection: self.selection.clone(),
            })
            .await;
        match &result {
            Ok(_) => self.notify_success(TEMPLATE_SAVED),
            Err(e) => self.notify_error(&e.to_string()),
        }
        result
    }

    pub async fn list_templates(&self) -> Result<Vec<MenuTemplate>, TemplateError> {
        self.deps
            .get_templates
            .execute(GetMenuTemplatesParams {
                restaurant_id: self.restaurant_id,
            })
            .await
            .inspect_err(|e| self.notify_error(&e.to_string()))
    }

    /// Replaces the selection with a template's products still present in the catalog.
    /// Returns how many products were applied.
    pub async fn apply_template(&mut self, template: &MenuTemplate) -> usize {
        self.selection.clear();
        self.protein_quantities.clear();

        let mut applied = 0;
        for item in &template.items {
            let Some(category) = item.category() else {
                continue;
            };
            self.ensure_products_loaded(category).await;
            let product = self
                .products_for(category)
                .iter()
                .find(|p| p.id == item.product_id)
                .cloned();
            match product {
                Some(product) => {
                    if self.toggle_product(category, product) {
                        applied += 1;
                    }
                }
                None => self.deps.logger.warn(&format!(
                    "Template product {} is no longer in the catalog",
                    item.product_id
                )),
            }
        }
        self.dirty = true;
        applied
    }

    // Notifications

    pub(super) fn notify_success(&self, message: &str) {
        self.deps.logger.info(message);
        self.deps
            .notifications
            .show(message, NotificationKind::Success);
    }

    pub(super) fn notify_error(&self, message: &str) {
        self.deps.logger.error(message);
        self.deps.notifications.show(message, NotificationKind::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Harness, InMemoryStore, catalog, named};
    use super::*;
    use crate::domain::category::model::DEFAULT_PROTEIN_QUANTITY;
    use crate::domain::daily_menu::model::MenuStatus;
    use crate::domain::session::UserProfile;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct AnonymousSession;

    #[async_trait]
    impl SessionService for AnonymousSession {
        async fn get_user_profile(&self) -> Option<UserProfile> {
            None
        }
        async fn get_user_restaurant(&self) -> Option<RestaurantId> {
            None
        }
    }

    fn select(composer: &mut MenuComposer, names: &[&str]) {
        let products = catalog();
        for name in names {
            let product = named(&products, name);
            let category = product.category().unwrap();
            composer.toggle_product(category, product);
        }
    }

    fn harness() -> Harness {
        Harness::new(InMemoryStore::with_products(catalog()))
    }

    #[tokio::test]
    async fn should_fail_connect_when_session_has_no_restaurant() {
        let harness = harness();

        let result = MenuComposer::connect(harness.dependencies(), &AnonymousSession).await;

        assert!(matches!(result, Err(MenuError::RestaurantMissing)));
    }

    #[tokio::test]
    async fn should_notify_and_write_nothing_when_finalizing_without_principio() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Pollo"]);
        composer.set_menu_price(15000.0);

        let result = composer.finalize(None).await;

        assert!(matches!(result, Err(MenuError::PrincipioRequired)));
        assert_eq!(harness.notifier.errors(), vec!["menu.principio_required"]);
        assert_eq!(harness.store.read(|t| t.commits), 0);
        assert!(harness.store.read(|t| t.menus.is_empty()));
        assert!(composer.is_dirty());
    }

    #[tokio::test]
    async fn should_generate_arroz_con_pollo_and_res_when_finalized() {
        let harness = harness();
        let mut composer = harness.composer();
        composer.open_wizard().await;
        select(&mut composer, &["Arroz", "Pollo", "Res"]);
        composer.set_menu_price(15000.0);

        let committed = composer.finalize(None).await.unwrap();

        let names: Vec<&str> = composer.combinations().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Arroz con Pollo", "Arroz con Res"]);
        assert!(composer.combinations().iter().all(|c| c.price == 15000.0));
        assert_eq!(composer.view(), ComposerView::Combinations);
        assert!(!composer.is_dirty());
        assert!(!composer.wizard().is_visible());
        assert_eq!(composer.menu().map(|m| m.id), Some(committed.menu.id));
        assert_eq!(
            harness.notifier.last(),
            Some((MENU_FINALIZED.to_string(), NotificationKind::Success))
        );
        harness.store.read(|t| {
            assert_eq!(t.menus.len(), 1);
            assert_eq!(t.selections.len(), 3);
            assert_eq!(t.protein_quantities.len(), 2);
            assert_eq!(t.combinations.len(), 2);
        });
    }

    #[tokio::test]
    async fn should_deactivate_previous_menu_when_finalized_again() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);
        let first = composer.finalize(None).await.unwrap();

        composer.create_new_menu().await;
        select(&mut composer, &["Frijoles", "Res"]);
        composer.set_menu_price(13000.0);
        let second = composer.finalize(None).await.unwrap();

        harness.store.read(|t| {
            let status_of = |id| t.menus.iter().find(|m| m.id == id).map(|m| m.status);
            assert_eq!(status_of(first.menu.id), Some(MenuStatus::Inactive));
            assert_eq!(status_of(second.menu.id), Some(MenuStatus::Active));
        });
    }

    #[tokio::test]
    async fn should_commit_twice_and_keep_last_menu_active_when_finalize_repeats() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);

        let first = composer.finalize(None).await.unwrap();
        let second = composer.finalize(None).await.unwrap();

        assert_ne!(first.menu.id, second.menu.id);
        assert_eq!(composer.menu().map(|m| m.id), Some(second.menu.id));
        assert!(composer
            .combinations()
            .iter()
            .all(|c| c.daily_menu_id == second.menu.id));
        assert!(!composer.is_pending(PendingOperation::Generating));
        harness.store.read(|t| {
            assert_eq!(t.commits, 2);
            let active: Vec<Uuid> = t.menus.iter().filter(|m| m.is_active()).map(|m| m.id).collect();
            assert_eq!(active, vec![second.menu.id]);
        });
    }

    #[tokio::test]
    async fn should_keep_selection_and_notify_when_commit_fails() {
        let harness = harness();
        harness.store.write(|t| t.fail_commit = true);
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);

        let result = composer.finalize(None).await;

        assert!(matches!(result, Err(MenuError::Repository(_))));
        assert_eq!(harness.notifier.errors().len(), 1);
        assert!(composer.menu().is_none());
        assert!(composer.is_dirty());
        assert_eq!(composer.selection().total(), 2);
        assert!(!composer.is_pending(PendingOperation::Generating));
    }

    #[tokio::test]
    async fn should_seed_selection_and_show_combinations_when_active_menu_exists() {
        let harness = harness();
        let mut first = harness.composer();
        select(&mut first, &["Arroz", "Frijoles", "Pollo"]);
        first.set_protein_quantity(named(&catalog(), "Pollo").id, 7);
        first.set_menu_price(15000.0);
        first.finalize(None).await.unwrap();

        let mut composer = harness.composer();
        composer.initialize().await;

        assert_eq!(composer.view(), ComposerView::Combinations);
        assert_eq!(composer.combinations().len(), 2);
        assert_eq!(composer.selection().count(MenuCategory::Principios), 2);
        assert_eq!(composer.menu_price(), 15000.0);
        assert_eq!(
            composer.protein_quantities().get(named(&catalog(), "Pollo").id),
            Some(7)
        );
        assert!(!composer.is_dirty());
    }

    #[tokio::test]
    async fn should_start_in_creation_view_when_no_active_menu() {
        let harness = harness();
        let stale = DailyMenu::from_repository(
            Uuid::new_v4(),
            harness.restaurant_id,
            9000.0,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            MenuStatus::Active,
            chrono::Utc::now(),
        );
        harness.store.write(|t| t.menus.push(stale));
        let mut composer = harness.composer();

        composer.initialize().await;

        assert_eq!(composer.view(), ComposerView::Creation);
        assert!(composer.selection().is_empty());
        assert!(composer.menu().is_none());
    }

    #[tokio::test]
    async fn should_notify_and_start_in_creation_view_when_active_menu_load_fails() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);
        composer.finalize(None).await.unwrap();
        harness.store.write(|t| t.fail_load = true);

        composer.initialize().await;

        assert_eq!(composer.view(), ComposerView::Creation);
        assert!(composer.selection().is_empty());
        assert!(composer.menu().is_none());
        assert!(composer.combinations().is_empty());
        assert_eq!(composer.last_error(), Some("repository.persistence"));
        assert_eq!(harness.notifier.errors(), vec!["repository.persistence"]);
    }

    #[tokio::test]
    async fn should_load_menu_without_quick_picks_when_usage_history_fails() {
        let harness = harness();
        let res = named(&catalog(), "Res");
        harness.store.write(|t| {
            t.usage.push(UsageRecord {
                product_id: res.id,
                product_name: res.name.clone(),
                category_name: "Proteínas".to_string(),
                times_used: 3,
                last_used_date: None,
                restaurant_price: None,
            })
        });
        let mut first = harness.composer();
        select(&mut first, &["Arroz", "Res"]);
        first.set_menu_price(12000.0);
        first.finalize(None).await.unwrap();
        harness.store.write(|t| t.fail_usage = true);
        let mut composer = harness.composer();

        composer.initialize().await;

        assert_eq!(composer.view(), ComposerView::Combinations);
        assert_eq!(composer.combinations().len(), 1);
        assert!(composer.quick_picks(MenuCategory::Proteinas).is_empty());
        assert_eq!(composer.last_error(), None);
        assert!(harness.notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn should_seed_and_drop_protein_quantity_when_proteina_toggled() {
        let harness = harness();
        let mut composer = harness.composer();
        let pollo = named(&catalog(), "Pollo");

        assert!(composer.toggle_product(MenuCategory::Proteinas, pollo.clone()));
        assert_eq!(
            composer.protein_quantities().get(pollo.id),
            Some(DEFAULT_PROTEIN_QUANTITY)
        );
        assert!(composer.set_protein_quantity(pollo.id, 0));
        assert_eq!(composer.protein_quantities().get(pollo.id), Some(1));

        assert!(!composer.toggle_product(MenuCategory::Proteinas, pollo.clone()));
        assert_eq!(composer.protein_quantities().get(pollo.id), None);
        assert!(!composer.set_protein_quantity(pollo.id, 3));
    }

    #[tokio::test]
    async fn should_load_category_products_as_wizard_advances() {
        let harness = harness();
        let mut composer = harness.composer();

        composer.open_wizard().await;
        assert_eq!(composer.products_for(MenuCategory::Entradas).len(), 2);
        assert!(!composer.wizard_next().await);

        let sopa = composer.products_for(MenuCategory::Entradas)[0].clone();
        composer.toggle_in_current_step(sopa);
        assert!(composer.wizard_next().await);

        assert_eq!(composer.wizard().current_category(), Some(MenuCategory::Principios));
        assert_eq!(composer.products_for(MenuCategory::Principios).len(), 2);
        assert!(composer.wizard_prev().await);
        assert_eq!(composer.wizard().current_category(), Some(MenuCategory::Entradas));
    }

    #[tokio::test]
    async fn should_notify_and_retry_when_catalog_fetch_fails() {
        let harness = harness();
        harness.store.write(|t| t.fail_catalog = true);
        let mut composer = harness.composer();

        composer.ensure_products_loaded(MenuCategory::Bebidas).await;
        assert!(composer.products_for(MenuCategory::Bebidas).is_empty());
        assert_eq!(harness.notifier.errors(), vec!["catalog.unavailable"]);

        harness.store.write(|t| t.fail_catalog = false);
        composer.ensure_products_loaded(MenuCategory::Bebidas).await;
        assert_eq!(composer.products_for(MenuCategory::Bebidas).len(), 2);
    }

    #[tokio::test]
    async fn should_keep_changes_when_discard_declined() {
        let harness = harness();
        let mut composer = harness.composer();
        composer.open_wizard().await;
        select(&mut composer, &["Sopa de Verduras"]);
        harness.confirmation.answer(false);

        assert!(!composer.close_wizard().await);

        assert!(composer.wizard().is_visible());
        assert_eq!(composer.selection().total(), 1);
        assert!(composer.is_dirty());
    }

    #[tokio::test]
    async fn should_restore_persisted_selection_when_discard_confirmed() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);
        composer.finalize(None).await.unwrap();

        composer.open_wizard().await;
        select(&mut composer, &["Res", "Limonada"]);
        composer.set_menu_price(1.0);
        harness.confirmation.answer(true);

        assert!(composer.close_wizard().await);

        assert_eq!(composer.selection().total(), 2);
        assert_eq!(composer.menu_price(), 12000.0);
        assert!(!composer.is_dirty());
        assert!(!composer.wizard().is_visible());
    }

    #[tokio::test]
    async fn should_clear_everything_when_creating_new_menu() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);
        composer.finalize(None).await.unwrap();

        composer.create_new_menu().await;

        assert!(composer.selection().is_empty());
        assert!(composer.protein_quantities().is_empty());
        assert!(composer.combinations().is_empty());
        assert!(composer.menu().is_none());
        assert_eq!(composer.menu_price(), 0.0);
        assert_eq!(composer.view(), ComposerView::Creation);
        assert!(composer.wizard().is_visible());
        assert_eq!(composer.wizard().step(), WizardStep::FIRST);
    }

    #[tokio::test]
    async fn should_persist_without_combinations_when_saved_as_is() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Limonada", "Ensalada"]);
        composer.set_menu_price(8000.0);

        let menu = composer.save_as_is().await.unwrap();

        assert!(menu.is_active());
        assert!(composer.combinations().is_empty());
        harness.store.read(|t| {
            assert_eq!(t.selections.len(), 2);
            assert!(t.combinations.is_empty());
        });
        assert_eq!(
            harness.notifier.last(),
            Some((MENU_SAVED.to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn should_reject_save_as_is_when_selection_empty() {
        let harness = harness();
        let mut composer = harness.composer();
        composer.set_menu_price(8000.0);

        let result = composer.save_as_is().await;

        assert!(matches!(result, Err(MenuError::EmptySelection)));
        assert_eq!(harness.store.read(|t| t.commits), 0);
    }

    #[tokio::test]
    async fn should_list_configuration_rows_in_category_order() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Limonada", "Pollo", "Arroz"]);

        let items = composer.configuration_items();

        let categories: Vec<MenuCategory> = items.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![MenuCategory::Principios, MenuCategory::Proteinas, MenuCategory::Bebidas]
        );
        assert_eq!(items[1].planned_quantity, Some(DEFAULT_PROTEIN_QUANTITY));
        assert_eq!(items[0].planned_quantity, None);
        assert_eq!(items[2].price, MenuCategory::Bebidas.default_price());

        let pollo = named(&catalog(), "Pollo").id;
        assert!(composer.remove_configuration_item(MenuCategory::Proteinas, pollo));
        assert!(!composer.remove_configuration_item(MenuCategory::Proteinas, pollo));
        assert_eq!(composer.protein_quantities().get(pollo), None);
    }

    #[tokio::test]
    async fn should_quick_select_previously_used_product() {
        let harness = harness();
        let res = named(&catalog(), "Res");
        harness.store.write(|t| {
            t.usage.push(UsageRecord {
                product_id: res.id,
                product_name: res.name.clone(),
                category_name: "Proteínas".to_string(),
                times_used: 12,
                last_used_date: None,
                restaurant_price: None,
            })
        });
        let mut composer = harness.composer();
        composer.initialize().await;

        let picks = composer.quick_picks(MenuCategory::Proteinas).to_vec();
        assert_eq!(picks.len(), 1);

        assert!(composer.quick_select(MenuCategory::Proteinas, &picks[0]).await);
        assert!(composer.selection().contains(MenuCategory::Proteinas, res.id));
        assert!(!composer.quick_select(MenuCategory::Proteinas, &picks[0]).await);
    }

    #[tokio::test]
    async fn should_save_template_alongside_finalized_menu() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        composer.set_menu_price(12000.0);

        let committed = composer.finalize(Some("Lunes".to_string())).await.unwrap();

        assert!(matches!(committed.template, TemplateOutcome::Saved(_)));
        let templates = composer.list_templates().await.unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].template_name, "Lunes");
    }

    #[tokio::test]
    async fn should_apply_template_products_still_in_catalog() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz", "Pollo"]);
        let mut template = composer.save_template("Martes".to_string()).await.unwrap();
        template.items.push(crate::domain::template::model::MenuTemplateItem {
            product_id: Uuid::new_v4(),
            category_external_id: Some(MenuCategory::Bebidas.external_id()),
            category_name: None,
            product_name_snapshot: Some("Retirada".to_string()),
        });
        composer.create_new_menu().await;

        let applied = composer.apply_template(&template).await;

        assert_eq!(applied, 2);
        assert_eq!(composer.selection().total(), 2);
        assert!(composer.protein_quantities().get(named(&catalog(), "Pollo").id).is_some());
        assert!(composer.is_dirty());
    }

    #[tokio::test]
    async fn should_reject_blank_template_name() {
        let harness = harness();
        let mut composer = harness.composer();
        select(&mut composer, &["Arroz"]);

        let result = composer.save_template("   ".to_string()).await;

        assert!(matches!(result, Err(TemplateError::NameEmpty)));
        assert_eq!(harness.notifier.errors(), vec!["template.name_empty"]);
    }
}
