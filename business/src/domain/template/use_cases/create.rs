use async_trait::async_trait;

use crate::domain::daily_menu::selection::Selection;
use crate::domain::shared::value_objects::RestaurantId;
use crate::domain::template::errors::TemplateError;
use crate::domain::template::model::MenuTemplate;

pub struct CreateMenuTemplateParams {
    pub restaurant_id: RestaurantId,
    pub template_name: String,
    pub selection: Selection,
}

#[async_trait]
pub trait CreateMenuTemplateUseCase: Send + Sync {
    async fn execute(&self, params: CreateMenuTemplateParams)
    -> Result<MenuTemplate, TemplateError>;
}
