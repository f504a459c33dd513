#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
