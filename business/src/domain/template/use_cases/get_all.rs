use async_trait::async_trait;

use crate::domain::shared::value_objects::RestaurantId;
use crate::domain::template::errors::TemplateError;
use crate::domain::template::model::MenuTemplate;

pub struct GetMenuTemplatesParams {
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetMenuTemplatesUseCase: Send + Sync {
    async fn execute(&self, params: GetMenuTemplatesParams)
    -> Result<Vec<MenuTemplate>, TemplateError>;
}
