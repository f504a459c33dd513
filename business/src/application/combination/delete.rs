use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::repository::CombinationRepository;
use crate::domain::combination::use_cases::delete::{
    DeleteCombinationParams, DeleteCombinationUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCombinationUseCaseImpl {
    pub repository: Arc<dyn CombinationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCombinationUseCase for DeleteCombinationUseCaseImpl {
    async fn execute(&self, params: DeleteCombinationParams) -> Result<(), CombinationError> {
        self.logger
            .info(&format!("Deleting combination: {}", params.id));

        self.repository
            .delete(params.id, &params.restaurant_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CombinationError::NotFound,
                other => CombinationError::Repository(other),
            })?;

        self.logger
            .info(&format!("Combination deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::combination::model::{
        CombinationFlag, CombinationPatch, GeneratedCombination,
    };
    use crate::domain::shared::value_objects::RestaurantId;
    use mockall::mock;
    use mockall::predicate::{always, eq};
    use uuid::Uuid;

    mock! {
        pub CombinationRepo {}

        #[async_trait]
        impl CombinationRepository for CombinationRepo {
            async fn get_by_menu(&self, daily_menu_id: Uuid, restaurant_id: &RestaurantId) -> Result<Vec<GeneratedCombination>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<GeneratedCombination, RepositoryError>;
            async fn update_fields(&self, id: Uuid, restaurant_id: &RestaurantId, patch: &CombinationPatch) -> Result<GeneratedCombination, RepositoryError>;
            async fn toggle_flag(&self, id: Uuid, restaurant_id: &RestaurantId, flag: CombinationFlag) -> Result<GeneratedCombination, RepositoryError>;
            async fn delete(&self, id: Uuid, restaurant_id: &RestaurantId) -> Result<(), RepositoryError>;
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

    fn restaurant() -> RestaurantId {
        RestaurantId::new(Uuid::from_u128(7))
    }

    #[tokio::test]
    async fn should_delete_exactly_the_requested_combination() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo
            .expect_delete()
            .with(eq(id), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = DeleteCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCombinationParams {
                id,
                restaurant_id: restaurant(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_was_deleted() {
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DeleteCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCombinationParams {
                id: Uuid::new_v4(),
                restaurant_id: restaurant(),
            })
            .await;

        assert!(matches!(result, Err(CombinationError::NotFound)));
    }

    #[tokio::test]
    async fn should_surface_database_error_when_delete_fails() {
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = DeleteCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCombinationParams {
                id: Uuid::new_v4(),
                restaurant_id: restaurant(),
            })
            .await;

        assert!(matches!(
            result,
            Err(CombinationError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
