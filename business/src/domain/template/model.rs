use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::TemplateError;
use crate::domain::category::model::MenuCategory;
use crate::domain::daily_menu::selection::Selection;
use crate::domain::shared::value_objects::RestaurantId;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuTemplateItem {
    pub product_id: Uuid,
    pub category_external_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub product_name_snapshot: Option<String>,
}

impl MenuTemplateItem {
    pub fn category(&self) -> Option<MenuCategory> {
        self.category_external_id
            .and_then(MenuCategory::from_external_id)
            .or_else(|| {
                self.category_name
                    .as_deref()
                    .and_then(MenuCategory::from_display_name)
            })
    }
}

/// Named, date-independent product selection kept for reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTemplate {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub template_name: String,
    pub items: Vec<MenuTemplateItem>,
    pub created_at: DateTime<Utc>,
}

impl MenuTemplate {
    pub fn from_selection(
        restaurant_id: RestaurantId,
        template_name: String,
        selection: &Selection,
    ) -> Result<Self, TemplateError> {
        let template_name = template_name.trim().to_string();
        if template_name.is_empty() {
            return Err(TemplateError::NameEmpty);
        }
        if selection.is_empty() {
            return Err(TemplateError::EmptySelection);
        }

        let items = selection
            .iter()
            .flat_map(|(category, products)| {
                products.iter().map(move |product| MenuTemplateItem {
                    product_id: product.id,
                    category_external_id: Some(category.external_id()),
                    category_name: Some(category.display_name().to_string()),
                    product_name_snapshot: Some(product.name.clone()),
                })
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            restaurant_id,
            template_name,
            items,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        restaurant_id: RestaurantId,
        template_name: String,
        items: Vec<MenuTemplateItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            template_name,
            items,
            created_at,
        }
    }
}
