use std::collections::VecDeque;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::state::ComposerDependencies;
use super::store::MenuComposer;
use crate::application::catalog::get_by_category::GetProductsByCategoryUseCaseImpl;
use crate::application::catalog::get_usage_history::GetUsageHistoryUseCaseImpl;
use crate::application::combination::delete::DeleteCombinationUseCaseImpl;
use crate::application::combination::get_by_menu::GetCombinationsUseCaseImpl;
use crate::application::combination::toggle_flag::ToggleCombinationFlagUseCaseImpl;
use crate::application::combination::update::UpdateCombinationUseCaseImpl;
use crate::application::daily_menu::commit::CommitMenuUseCaseImpl;
use crate::application::daily_menu::get_selection::GetMenuSelectionUseCaseImpl;
use crate::application::daily_menu::load_active::LoadActiveMenuUseCaseImpl;
use crate::application::template::create::CreateMenuTemplateUseCaseImpl;
use crate::application::template::get_all::GetMenuTemplatesUseCaseImpl;
use crate::domain::catalog::model::{Product, UsageRecord};
use crate::domain::catalog::repository::{ProductCatalogRepository, UsageHistoryRepository};
use crate::domain::category::model::MenuCategory;
use crate::domain::combination::model::{
    CombinationFlag, CombinationPatch, GeneratedCombination,
};
use crate::domain::combination::repository::CombinationRepository;
use crate::domain::confirmation::Confirmation;
use crate::domain::daily_menu::model::{
    DailyMenu, MenuComposition, MenuSelection, MenuStatus, PersistedProteinQuantity,
};
use crate::domain::daily_menu::repository::DailyMenuRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::{NotificationChannel, NotificationKind};
use crate::domain::shared::value_objects::RestaurantId;
use crate::domain::template::model::MenuTemplate;
use crate::domain::template::repository::MenuTemplateRepository;
use crate::domain::wizard::state_machine::Wizard;

#[derive(Default)]
pub struct Tables {
    pub products: Vec<Product>,
    pub usage: Vec<UsageRecord>,
    pub menus: Vec<DailyMenu>,
    pub selections: Vec<MenuSelection>,
    pub protein_quantities: Vec<PersistedProteinQuantity>,
    pub combinations: Vec<GeneratedCombination>,
    pub templates: Vec<MenuTemplate>,
    pub fail_catalog: bool,
    pub fail_commit: bool,
    pub fail_combination_writes: bool,
    pub fail_load: bool,
    pub fail_usage: bool,
    pub commits: usize,
    pub deletes: usize,
}

/// Shared in-memory backing for every repository port.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().products = products;
        store
    }

    pub fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables.lock().unwrap())
    }

    pub fn write(&self, f: impl FnOnce(&mut Tables)) {
        f(&mut self.tables.lock().unwrap())
    }

    fn owns_menu(tables: &Tables, daily_menu_id: Uuid, restaurant_id: &RestaurantId) -> bool {
        tables
            .menus
            .iter()
            .any(|m| m.id == daily_menu_id && m.restaurant_id == *restaurant_id)
    }

    fn owned_combination(tables: &Tables, id: Uuid, restaurant_id: &RestaurantId) -> Option<usize> {
        tables
            .combinations
            .iter()
            .position(|c| c.id == id && Self::owns_menu(tables, c.daily_menu_id, restaurant_id))
    }
}

#[async_trait]
impl ProductCatalogRepository for InMemoryStore {
    async fn get_products_by_category(
        &self,
        category_external_id: Uuid,
    ) -> Result<Vec<Product>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        if tables.fail_catalog {
            return Err(RepositoryError::DatabaseError);
        }
        Ok(tables
            .products
            .iter()
            .filter(|p| p.category_external_id == category_external_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UsageHistoryRepository for InMemoryStore {
    async fn get_product_usage_history(
        &self,
        _restaurant_id: &RestaurantId,
    ) -> Result<Vec<UsageRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        if tables.fail_usage {
            return Err(RepositoryError::DatabaseError);
        }
        Ok(tables.usage.clone())
    }
}

#[async_trait]
impl DailyMenuRepository for InMemoryStore {
    async fn find_active(
        &self,
        restaurant_id: &RestaurantId,
        menu_date: NaiveDate,
    ) -> Result<Option<DailyMenu>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        if tables.fail_load {
            return Err(RepositoryError::DatabaseError);
        }
        Ok(tables
            .menus
            .iter()
            .find(|m| m.restaurant_id == *restaurant_id && m.menu_date == menu_date && m.is_active())
            .cloned())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<DailyMenu, RepositoryError> {
        self.tables
            .lock()
            .unwrap()
            .menus
            .iter()
            .find(|m| m.id == id && m.restaurant_id == *restaurant_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_selections(
        &self,
        daily_menu_id: Uuid,
    ) -> Result<Vec<MenuSelection>, RepositoryError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .selections
            .iter()
            .filter(|s| s.daily_menu_id == daily_menu_id)
            .cloned()
            .collect())
    }

    async fn get_protein_quantities(
        &self,
        daily_menu_id: Uuid,
    ) -> Result<Vec<PersistedProteinQuantity>, RepositoryError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .protein_quantities
            .iter()
            .filter(|q| q.daily_menu_id == daily_menu_id)
            .cloned()
            .collect())
    }

    async fn save_composition(&self, composition: &MenuComposition) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.fail_commit {
            return Err(RepositoryError::TransactionAborted);
        }
        let menu = &composition.menu;
        for previous in tables.menus.iter_mut().filter(|m| {
            m.restaurant_id == menu.restaurant_id && m.menu_date == menu.menu_date && m.is_active()
        }) {
            previous.status = MenuStatus::Inactive;
        }
        tables.menus.push(menu.clone());
        tables.selections.extend(composition.selections.iter().cloned());
        tables
            .protein_quantities
            .extend(composition.protein_quantities.iter().cloned());
        tables
            .combinations
            .extend(composition.combinations.iter().cloned());
        tables.commits += 1;
        Ok(())
    }
}

#[async_trait]
impl CombinationRepository for InMemoryStore {
    async fn get_by_menu(
        &self,
        daily_menu_id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<GeneratedCombination>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        if !Self::owns_menu(&tables, daily_menu_id, restaurant_id) {
            return Ok(Vec::new());
        }
        Ok(tables
            .combinations
            .iter()
            .filter(|c| c.daily_menu_id == daily_menu_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<GeneratedCombination, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        tables
            .combinations
            .iter()
            .find(|c| c.id == id && Self::owns_menu(&tables, c.daily_menu_id, restaurant_id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update_fields(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        patch: &CombinationPatch,
    ) -> Result<GeneratedCombination, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.fail_combination_writes {
            return Err(RepositoryError::DatabaseError);
        }
        let index =
            Self::owned_combination(&tables, id, restaurant_id).ok_or(RepositoryError::NotFound)?;
        let row = &mut tables.combinations[index];
        row.apply(patch.clone())
            .map_err(|_| RepositoryError::DatabaseError)?;
        Ok(row.clone())
    }

    async fn toggle_flag(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
        flag: CombinationFlag,
    ) -> Result<GeneratedCombination, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.fail_combination_writes {
            return Err(RepositoryError::DatabaseError);
        }
        let index =
            Self::owned_combination(&tables, id, restaurant_id).ok_or(RepositoryError::NotFound)?;
        let row = &mut tables.combinations[index];
        row.toggle(flag);
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.fail_combination_writes {
            return Err(RepositoryError::DatabaseError);
        }
        let index =
            Self::owned_combination(&tables, id, restaurant_id).ok_or(RepositoryError::NotFound)?;
        tables.combinations.remove(index);
        tables.deletes += 1;
        Ok(())
    }
}

#[async_trait]
impl MenuTemplateRepository for InMemoryStore {
    async fn get_all(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuTemplate>, RepositoryError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .templates
            .iter()
            .filter(|t| t.restaurant_id == *restaurant_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<MenuTemplate, RepositoryError> {
        self.tables
            .lock()
            .unwrap()
            .templates
            .iter()
            .find(|t| t.id == id && t.restaurant_id == *restaurant_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, template: &MenuTemplate) -> Result<(), RepositoryError> {
        self.tables.lock().unwrap().templates.push(template.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<(String, NotificationKind)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(String, NotificationKind)> {
        self.shown.lock().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, kind)| *kind == NotificationKind::Error)
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl NotificationChannel for RecordingNotifier {
    fn show(&self, message: &str, kind: NotificationKind) {
        self.shown.lock().unwrap().push((message.to_string(), kind));
    }
}

/// Answers prompts from a queue; an empty queue confirms.
#[derive(Default)]
pub struct ScriptedConfirmation {
    pub answers: Mutex<VecDeque<bool>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn answer(&self, value: bool) {
        self.answers.lock().unwrap().push_back(value);
    }
}

#[async_trait]
impl Confirmation for ScriptedConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}

pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub struct Harness {
    pub store: InMemoryStore,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub restaurant_id: RestaurantId,
}

impl Harness {
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store,
            notifier: Arc::new(RecordingNotifier::default()),
            confirmation: Arc::new(ScriptedConfirmation::default()),
            restaurant_id: RestaurantId::new(Uuid::new_v4()),
        }
    }

    pub fn dependencies(&self) -> ComposerDependencies {
        let logger: Arc<dyn Logger> = Arc::new(NullLogger);
        let store = Arc::new(self.store.clone());
        ComposerDependencies {
            get_products: Arc::new(GetProductsByCategoryUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            get_usage_history: Arc::new(GetUsageHistoryUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            load_active_menu: Arc::new(LoadActiveMenuUseCaseImpl {
                repository: store.clone(),
                combination_repository: store.clone(),
                logger: logger.clone(),
            }),
            commit_menu: Arc::new(CommitMenuUseCaseImpl {
                repository: store.clone(),
                template_repository: store.clone(),
                logger: logger.clone(),
            }),
            get_menu_selection: Arc::new(GetMenuSelectionUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            get_combinations: Arc::new(GetCombinationsUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            update_combination: Arc::new(UpdateCombinationUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            toggle_combination_flag: Arc::new(ToggleCombinationFlagUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            delete_combination: Arc::new(DeleteCombinationUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            create_template: Arc::new(CreateMenuTemplateUseCaseImpl {
                repository: store.clone(),
                logger: logger.clone(),
            }),
            get_templates: Arc::new(GetMenuTemplatesUseCaseImpl {
                repository: store,
                logger: logger.clone(),
            }),
            notifications: self.notifier.clone(),
            confirmation: self.confirmation.clone(),
            logger,
        }
    }

    pub fn composer(&self) -> MenuComposer {
        MenuComposer::new(
            self.restaurant_id,
            self.dependencies(),
            Wizard::with_animation_delay(Duration::ZERO),
        )
    }
}

pub fn product(name: &str, category: MenuCategory) -> Product {
    Product {
        suggested_price_min: Some(category.default_price()),
        ..Product::from_snapshot(Uuid::new_v4(), name.to_string(), category)
    }
}

/// Catalog with two products per category, named after common dishes.
pub fn catalog() -> Vec<Product> {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(|| vec![
        product("Sopa de Verduras", MenuCategory::Entradas),
        product("Crema de Ahuyama", MenuCategory::Entradas),
        product("Arroz", MenuCategory::Principios),
        product("Frijoles", MenuCategory::Principios),
        product("Pollo", MenuCategory::Proteinas),
        product("Res", MenuCategory::Proteinas),
        product("Ensalada", MenuCategory::Acompanamientos),
        product("Papa Salada", MenuCategory::Acompanamientos),
        product("Limonada", MenuCategory::Bebidas),
        product("Jugo de Mora", MenuCategory::Bebidas),
    ]).clone()
}

pub fn named(products: &[Product], name: &str) -> Product {
    products
        .iter()
        .find(|p| p.name == name)
        .cloned()
        .unwrap()
}
