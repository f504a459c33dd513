use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::template::errors::TemplateError;
use crate::domain::template::model::MenuTemplate;
use crate::domain::template::repository::MenuTemplateRepository;
use crate::domain::template::use_cases::create::{
    CreateMenuTemplateParams, CreateMenuTemplateUseCase,
};

pub struct CreateMenuTemplateUseCaseImpl {
    pub repository: Arc<dyn MenuTemplateRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateMenuTemplateUseCase for CreateMenuTemplateUseCaseImpl {
    async fn execute(
        &self,
        params: CreateMenuTemplateParams,
    ) -> Result<MenuTemplate, TemplateError> {
        self.logger
            .info(&format!("Creating menu template: {}", params.template_name));

        let template = MenuTemplate::from_selection(
            params.restaurant_id,
            params.template_name,
            &params.selection,
        )?;

        self.repository.save(&template).await?;

        self.logger.info(&format!(
            "Menu template created with id: {} ({} items)",
            template.id,
            template.items.len()
        ));
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::category::model::MenuCategory;
    use crate::domain::daily_menu::selection::Selection;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::RestaurantId;
    use mockall::mock;
    use uuid::Uuid;

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

    fn selection() -> Selection {
        let mut selection = Selection::new();
        selection.add(
            MenuCategory::Proteinas,
            Product::from_snapshot(Uuid::new_v4(), "Cerdo".to_string(), MenuCategory::Proteinas),
        );
        selection
    }

    #[tokio::test]
    async fn should_create_template_when_name_valid() {
        let mut mock_repo = MockTemplateRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateMenuTemplateUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let template = use_case
            .execute(CreateMenuTemplateParams {
                restaurant_id: RestaurantId::new(Uuid::new_v4()),
                template_name: "Menú ejecutivo".to_string(),
                selection: selection(),
            })
            .await
            .unwrap();

        assert_eq!(template.template_name, "Menú ejecutivo");
        assert_eq!(template.items.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_template_when_name_is_empty() {
        let mut mock_repo = MockTemplateRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateMenuTemplateUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateMenuTemplateParams {
                restaurant_id: RestaurantId::new(Uuid::new_v4()),
                template_name: "".to_string(),
                selection: selection(),
            })
            .await;

        assert!(matches!(result, Err(TemplateError::NameEmpty)));
    }
}
