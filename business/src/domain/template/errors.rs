#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template.name_empty")]
    NameEmpty,
    #[error("template.empty_selection")]
    EmptySelection,
    #[error("template.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
