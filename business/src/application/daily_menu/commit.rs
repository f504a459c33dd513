use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::model::MenuCategory;
use crate::domain::daily_menu::errors::MenuError;
use crate::domain::daily_menu::generator::{generate_combinations, validate_generation};
use crate::domain::daily_menu::model::{
    DailyMenu, MenuComposition, PROTEIN_UNIT_TYPE, PersistedProteinQuantity, is_valid_price,
};
use crate::domain::daily_menu::repository::DailyMenuRepository;
use crate::domain::daily_menu::use_cases::commit::{
    CommitMenuParams, CommitMenuUseCase, CommittedMenu, TemplateOutcome,
};
use crate::domain::logger::Logger;
use crate::domain::template::model::MenuTemplate;
use crate::domain::template::repository::MenuTemplateRepository;

pub struct CommitMenuUseCaseImpl {
    pub repository: Arc<dyn DailyMenuRepository>,
    pub template_repository: Arc<dyn MenuTemplateRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CommitMenuUseCaseImpl {
    fn validate(params: &CommitMenuParams) -> Result<(), MenuError> {
        if params.generate_combinations {
            validate_generation(&params.selection, params.menu_price)?;
        } else {
            if params.selection.is_empty() {
                return Err(MenuError::EmptySelection);
            }
            if !is_valid_price(params.menu_price) {
                return Err(MenuError::InvalidPrice);
            }
        }

        if let Some(name) = &params.template_name
            && name.trim().is_empty()
        {
            return Err(MenuError::TemplateNameEmpty);
        }
        Ok(())
    }

    async fn save_template(&self, params: &CommitMenuParams) -> TemplateOutcome {
        let Some(name) = params.template_name.clone() else {
            return TemplateOutcome::NotRequested;
        };

        let template =
            match MenuTemplate::from_selection(params.restaurant_id, name, &params.selection) {
                Ok(template) => template,
                Err(e) => return TemplateOutcome::Failed(e.to_string()),
            };

        match self.template_repository.save(&template).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Menu template saved: {}", template.id));
                TemplateOutcome::Saved(template)
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to save menu template: {}", e));
                TemplateOutcome::Failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl CommitMenuUseCase for CommitMenuUseCaseImpl {
    async fn execute(&self, params: CommitMenuParams) -> Result<CommittedMenu, MenuError> {
        self.logger.info(&format!(
            "Committing daily menu for restaurant {} ({} products)",
            params.restaurant_id,
            params.selection.total()
        ));

        Self::validate(&params)?;

        let menu = DailyMenu::new(
            params.restaurant_id,
            params.menu_price,
            Utc::now().date_naive(),
        )?;
        let selections = params.selection.to_rows(menu.id);
        let protein_quantities: Vec<PersistedProteinQuantity> = params
            .selection
            .products(MenuCategory::Proteinas)
            .iter()
            .map(|proteina| PersistedProteinQuantity {
                daily_menu_id: menu.id,
                product_id: proteina.id,
                planned_quantity: params.protein_quantities.get_or_default(proteina.id),
                unit_type: PROTEIN_UNIT_TYPE.to_string(),
            })
            .collect();
        let combinations = if params.generate_combinations {
            generate_combinations(
                menu.id,
                &params.selection,
                &params.protein_quantities,
                params.menu_price,
            )?
        } else {
            Vec::new()
        };

        let composition = MenuComposition {
            menu,
            selections,
            protein_quantities,
            combinations,
        };
        self.repository
            .save_composition(&composition)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Daily menu commit rolled back: {}", e))
            })?;

        self.logger.info(&format!(
            "Daily menu {} committed with {} combinations",
            composition.menu.id,
            composition.combinations.len()
        ));

        let template = self.save_template(&params).await;

        Ok(CommittedMenu {
            menu: composition.menu,
            combinations: composition.combinations,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::daily_menu::model::{MenuSelection, PersistedProteinQuantity};
    use crate::domain::daily_menu::selection::{ProteinQuantities, Selection};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::RestaurantId;
    use chrono::NaiveDate;
    use mockall::mock;
    use std::sync::Mutex;
    use uuid::Uuid;

    mock! {
        pub MenuRepo {}

        #[async_trait]
        impl DailyMenuRepository for MenuRepo {
            async fn find_active(&self, restaurant_id: &RestaurantId, menu_date: NaiveDate) -> Result<Option<DailyMenu>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<DailyMenu, RepositoryError>;
            async fn get_selections(&self, daily_menu_id: Uuid) -> Result<Vec<MenuSelection>, RepositoryError>;
            async fn get_protein_quantities(&self, daily_menu_id: Uuid) -> Result<Vec<PersistedProteinQuantity>, RepositoryError>;
            async fn save_composition(&self, composition: &MenuComposition) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub TemplateRepo {}

        #[async_trait]
        impl MenuTemplateRepository for TemplateRepo {
            async fn get_all(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuTemplate>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<MenuTemplate, RepositoryError>;
            async fn save(&self, template: &MenuTemplate) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn add(selection: &mut Selection, category: MenuCategory, name: &str) {
        selection.add(
            category,
            Product::from_snapshot(Uuid::new_v4(), name.to_string(), category),
        );
    }

    fn params(principios: &[&str], proteinas: &[&str], price: f64) -> CommitMenuParams {
        let mut selection = Selection::new();
        add(&mut selection, MenuCategory::Entradas, "Sopa de verduras");
        for name in principios {
            add(&mut selection, MenuCategory::Principios, name);
        }
        for name in proteinas {
            add(&mut selection, MenuCategory::Proteinas, name);
        }
        add(&mut selection, MenuCategory::Bebidas, "Limonada");
        CommitMenuParams {
            restaurant_id: RestaurantId::new(Uuid::new_v4()),
            selection,
            protein_quantities: ProteinQuantities::new(),
            menu_price: price,
            template_name: None,
            generate_combinations: true,
        }
    }

    #[tokio::test]
    async fn should_write_menu_selections_quantities_and_combinations_together() {
        let captured: Arc<Mutex<Option<MenuComposition>>> = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let mut mock_repo = MockMenuRepo::new();
        mock_repo
            .expect_save_composition()
            .times(1)
            .returning(move |composition| {
                *sink.lock().unwrap() = Some(composition.clone());
                Ok(())
            });
        let mut mock_templates = MockTemplateRepo::new();
        mock_templates.expect_save().never();

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(mock_templates),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(&["Arroz"], &["Pollo", "Res"], 15000.0))
            .await
            .unwrap();

        assert_eq!(result.combinations.len(), 2);
        assert!(matches!(result.template, TemplateOutcome::NotRequested));
        let composition = captured.lock().unwrap().take().unwrap();
        assert!(composition.menu.is_active());
        assert_eq!(composition.menu.menu_date, Utc::now().date_naive());
        assert_eq!(composition.selections.len(), 5);
        assert_eq!(composition.protein_quantities.len(), 2);
        assert!(
            composition
                .protein_quantities
                .iter()
                .all(|q| q.unit_type == PROTEIN_UNIT_TYPE && q.planned_quantity == 10)
        );
        let names: Vec<&str> = composition
            .combinations
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Arroz con Pollo", "Arroz con Res"]);
        assert!(composition.combinations.iter().all(|c| c.price == 15000.0));
        assert!(
            composition
                .combinations
                .iter()
                .all(|c| c.daily_menu_id == composition.menu.id)
        );
    }

    #[tokio::test]
    async fn should_reject_commit_without_writes_when_no_principio() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_save_composition().never();
        let mut mock_templates = MockTemplateRepo::new();
        mock_templates.expect_save().never();

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(mock_templates),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&[], &["Pollo"], 15000.0)).await;

        assert!(matches!(result, Err(MenuError::PrincipioRequired)));
    }

    #[tokio::test]
    async fn should_reject_commit_when_price_not_positive() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_save_composition().never();

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(MockTemplateRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&["Arroz"], &["Pollo"], 0.0)).await;

        assert!(matches!(result, Err(MenuError::InvalidPrice)));
    }

    #[tokio::test]
    async fn should_reject_commit_when_template_name_blank() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_save_composition().never();
        let mut commit = params(&["Arroz"], &["Pollo"], 15000.0);
        commit.template_name = Some("  ".to_string());

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(MockTemplateRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(commit).await;

        assert!(matches!(result, Err(MenuError::TemplateNameEmpty)));
    }

    #[tokio::test]
    async fn should_propagate_error_when_composition_rolled_back() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo
            .expect_save_composition()
            .returning(|_| Err(RepositoryError::TransactionAborted));
        let mut mock_templates = MockTemplateRepo::new();
        mock_templates.expect_save().never();
        let mut commit = params(&["Arroz"], &["Pollo"], 15000.0);
        commit.template_name = Some("Lunes".to_string());

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(mock_templates),
            logger: mock_logger(),
        };

        let result = use_case.execute(commit).await;

        assert!(matches!(
            result,
            Err(MenuError::Repository(RepositoryError::TransactionAborted))
        ));
    }

    #[tokio::test]
    async fn should_keep_menu_when_template_write_fails() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_save_composition().returning(|_| Ok(()));
        let mut mock_templates = MockTemplateRepo::new();
        mock_templates
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError));
        let mut commit = params(&["Arroz"], &["Pollo"], 15000.0);
        commit.template_name = Some("Lunes".to_string());

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(mock_templates),
            logger: mock_logger(),
        };

        let result = use_case.execute(commit).await.unwrap();

        assert_eq!(result.combinations.len(), 1);
        assert!(matches!(result.template, TemplateOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn should_save_template_snapshot_when_requested() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_save_composition().returning(|_| Ok(()));
        let mut mock_templates = MockTemplateRepo::new();
        mock_templates.expect_save().times(1).returning(|_| Ok(()));
        let mut commit = params(&["Arroz"], &["Pollo"], 15000.0);
        commit.template_name = Some("Lunes".to_string());

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(mock_templates),
            logger: mock_logger(),
        };

        let result = use_case.execute(commit).await.unwrap();

        match result.template {
            TemplateOutcome::Saved(template) => {
                assert_eq!(template.template_name, "Lunes");
                assert_eq!(template.items.len(), 4);
            }
            other => panic!("unexpected template outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_persist_selection_without_combinations_when_saving_as_is() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo
            .expect_save_composition()
            .withf(|c| c.combinations.is_empty() && c.selections.len() == 2)
            .returning(|_| Ok(()));
        let mut commit = params(&[], &[], 9000.0);
        commit.generate_combinations = false;

        let use_case = CommitMenuUseCaseImpl {
            repository: Arc::new(mock_repo),
            template_repository: Arc::new(MockTemplateRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(commit).await.unwrap();

        assert!(result.combinations.is_empty());
    }
}
