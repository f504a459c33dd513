use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::category::model::MenuCategory;

pub struct GetProductsByCategoryParams {
    pub category: MenuCategory,
}

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsByCategoryParams)
    -> Result<Vec<Product>, CatalogError>;
}
