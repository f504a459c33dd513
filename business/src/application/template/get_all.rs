use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::template::errors::TemplateError;
use crate::domain::template::model::MenuTemplate;
use crate::domain::template::repository::MenuTemplateRepository;
use crate::domain::template::use_cases::get_all::{
    GetMenuTemplatesParams, GetMenuTemplatesUseCase,
};

pub struct GetMenuTemplatesUseCaseImpl {
    pub repository: Arc<dyn MenuTemplateRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMenuTemplatesUseCase for GetMenuTemplatesUseCaseImpl {
    async fn execute(
        &self,
        params: GetMenuTemplatesParams,
    ) -> Result<Vec<MenuTemplate>, TemplateError> {
        self.logger.info("Fetching menu templates");
        let templates = self.repository.get_all(&params.restaurant_id).await?;
        self.logger
            .info(&format!("Found {} menu templates", templates.len()));
        Ok(templates)
    }
}
