#[derive(Debug, thiserror::Error)]
pub enum CombinationError {
    #[error("combination.not_found")]
    NotFound,
    #[error("combination.name_empty")]
    NameEmpty,
    #[error("combination.invalid_price")]
    InvalidPrice,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
