#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.principio_required")]
    PrincipioRequired,
    #[error("menu.proteina_required")]
    ProteinaRequired,
    #[error("menu.invalid_price")]
    InvalidPrice,
    #[error("menu.empty_selection")]
    EmptySelection,
    #[error("menu.template_name_empty")]
    TemplateNameEmpty,
    #[error("menu.restaurant_missing")]
    RestaurantMissing,
    #[error("menu.not_found")]
    NotFound,
    #[error("menu.no_menu_loaded")]
    NoMenuLoaded,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl MenuError {
    /// Validation errors are raised before any store access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MenuError::PrincipioRequired
                | MenuError::ProteinaRequired
                | MenuError::InvalidPrice
                | MenuError::EmptySelection
                | MenuError::TemplateNameEmpty
        )
    }
}
