use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::combination::errors::CombinationError;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::combination::repository::CombinationRepository;
use crate::domain::combination::use_cases::update::{
    UpdateCombinationParams, UpdateCombinationUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCombinationUseCaseImpl {
    pub repository: Arc<dyn CombinationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCombinationUseCase for UpdateCombinationUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCombinationParams,
    ) -> Result<GeneratedCombination, CombinationError> {
        self.logger
            .info(&format!("Updating combination: {}", params.id));

        params.patch.validate()?;
        let patch = params.patch.normalized();
        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => CombinationError::NotFound,
            other => CombinationError::Repository(other),
        };

        if patch.is_empty() {
            return self
                .repository
                .get_by_id(params.id, &params.restaurant_id)
                .await
                .map_err(not_found);
        }

        let combination = self
            .repository
            .update_fields(params.id, &params.restaurant_id, &patch)
            .await
            .map_err(not_found)?;

        self.logger
            .info(&format!("Combination updated: {}", combination.id));
        Ok(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::combination::model::{CombinationFlag, CombinationPatch};
    use crate::domain::combination::model::fixtures::combination;
    use crate::domain::shared::value_objects::RestaurantId;
    use mockall::mock;
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
    async fn should_update_only_price_when_patch_has_price() {
        let mut stored = combination("Arroz con Pollo", 15000.0);
        stored.favorite = true;
        stored.special = true;
        let id = stored.id;
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo
            .expect_update_fields()
            .withf(move |requested, _, patch| {
                *requested == id
                    && patch.price == Some(17000.0)
                    && patch.name.is_none()
                    && patch.description.is_none()
                    && patch.available.is_none()
            })
            .times(1)
            .returning(move |_, _, patch| {
                let mut row = stored.clone();
                row.apply(patch.clone()).map_err(|_| RepositoryError::DatabaseError)?;
                Ok(row)
            });

        let use_case = UpdateCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateCombinationParams {
                id,
                restaurant_id: restaurant(),
                patch: CombinationPatch {
                    price: Some(17000.0),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.price, 17000.0);
        assert_eq!(updated.name, "Arroz con Pollo");
        assert!(updated.favorite && updated.special && updated.available);
    }

    #[tokio::test]
    async fn should_send_trimmed_name_to_storage() {
        let stored = combination("Arroz con Pollo", 15000.0);
        let id = stored.id;
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo
            .expect_update_fields()
            .withf(|_, _, patch| patch.name.as_deref() == Some("Arroz Especial"))
            .times(1)
            .returning(move |_, _, patch| {
                let mut row = stored.clone();
                row.apply(patch.clone()).map_err(|_| RepositoryError::DatabaseError)?;
                Ok(row)
            });

        let use_case = UpdateCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateCombinationParams {
                id,
                restaurant_id: restaurant(),
                patch: CombinationPatch {
                    name: Some("  Arroz Especial ".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Arroz Especial");
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update_fields().never();

        let use_case = UpdateCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCombinationParams {
                id: Uuid::new_v4(),
                restaurant_id: restaurant(),
                patch: CombinationPatch {
                    name: Some("".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(CombinationError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_combination() {
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo
            .expect_update_fields()
            .returning(|_, _, _| Err(RepositoryError::NotFound));

        let use_case = UpdateCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCombinationParams {
                id: Uuid::new_v4(),
                restaurant_id: restaurant(),
                patch: CombinationPatch {
                    available: Some(false),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(CombinationError::NotFound)));
    }

    #[tokio::test]
    async fn should_skip_write_when_patch_is_empty() {
        let existing = combination("Pasta con Res", 12000.0);
        let mut mock_repo = MockCombinationRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(existing.clone()));
        mock_repo.expect_update_fields().never();

        let use_case = UpdateCombinationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCombinationParams {
                id: Uuid::new_v4(),
                restaurant_id: restaurant(),
                patch: CombinationPatch::default(),
            })
            .await;

        assert!(result.is_ok());
    }
}
