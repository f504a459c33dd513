use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::MenuTemplate;

#[async_trait]
pub trait MenuTemplateRepository: Send + Sync {
    async fn get_all(&self, restaurant_id: &RestaurantId)
    -> Result<Vec<MenuTemplate>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        restaurant_id: &RestaurantId,
    ) -> Result<MenuTemplate, RepositoryError>;
    async fn save(&self, template: &MenuTemplate) -> Result<(), RepositoryError>;
}
