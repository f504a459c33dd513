use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalogRepository;
use crate::domain::catalog::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductCatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, CatalogError> {
        self.logger
            .debug(&format!("Fetching catalog products for {}", params.category));

        let products = self
            .repository
            .get_products_by_category(params.category.external_id())
            .await
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "Catalog fetch failed for {}: {}",
                    params.category, e
                ))
            })?;

        // The catalog contract promises verified products only.
        let products: Vec<Product> = products.into_iter().filter(|p| p.verified).collect();

        self.logger.info(&format!(
            "Found {} products for {}",
            products.len(),
            params.category
        ));
        Ok(products)
    }
}
