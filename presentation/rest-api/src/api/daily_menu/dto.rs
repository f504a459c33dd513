use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::catalog::model::Product;
use business::domain::category::model::MenuCategory;
use business::domain::daily_menu::model::{
    DailyMenu, LoadedMenu, MenuSelection, PersistedProteinQuantity,
};
use business::domain::daily_menu::selection::{ProteinQuantities, Selection};
use business::domain::daily_menu::use_cases::commit::{
    CommitMenuParams, CommittedMenu, TemplateOutcome,
};
use business::domain::daily_menu::use_cases::get_selection::MenuSelectionSnapshot;
use business::domain::shared::value_objects::RestaurantId;

use crate::api::combination::dto::CombinationResponse;

/// One chosen product. `category` accepts a slug or a display name.
#[derive(Debug, Clone, Object)]
pub struct SelectionItemRequest {
    pub category: String,
    pub product_id: String,
    pub product_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProteinQuantityRequest {
    pub product_id: String,
    pub planned_quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CommitMenuRequest {
    pub menu_price: f64,
    /// Also saves the selection as a template under this name
    #[oai(skip_serializing_if_is_none)]
    pub template_name: Option<String>,
    /// Defaults to true. `false` saves the selection without generating combinations
    #[oai(skip_serializing_if_is_none)]
    pub generate_combinations: Option<bool>,
    pub items: Vec<SelectionItemRequest>,
    #[oai(default)]
    pub protein_quantities: Vec<ProteinQuantityRequest>,
}

/// Rebuilds a domain selection from request items, keeping their order.
pub fn selection_from_items(items: Vec<SelectionItemRequest>) -> Result<Selection, &'static str> {
    let mut selection = Selection::new();
    for item in items {
        let category: MenuCategory = item
            .category
            .parse()
            .map_err(|_| "menu.invalid_category")?;
        let product_id =
            Uuid::parse_str(&item.product_id).map_err(|_| "menu.invalid_product_id")?;
        selection.add(
            category,
            Product::from_snapshot(product_id, item.product_name, category),
        );
    }
    Ok(selection)
}

impl CommitMenuRequest {
    pub fn into_params(self, restaurant_id: RestaurantId) -> Result<CommitMenuParams, &'static str> {
        let selection = selection_from_items(self.items)?;

        let mut protein_quantities = ProteinQuantities::new();
        for quantity in self.protein_quantities {
            let product_id =
                Uuid::parse_str(&quantity.product_id).map_err(|_| "menu.invalid_product_id")?;
            protein_quantities.set(product_id, quantity.planned_quantity);
        }

        Ok(CommitMenuParams {
            restaurant_id,
            selection,
            protein_quantities,
            menu_price: self.menu_price,
            template_name: self.template_name,
            generate_combinations: self.generate_combinations.unwrap_or(true),
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct DailyMenuResponse {
    pub id: String,
    pub menu_price: f64,
    pub menu_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<DailyMenu> for DailyMenuResponse {
    fn from(menu: DailyMenu) -> Self {
        Self {
            id: menu.id.to_string(),
            menu_price: menu.menu_price,
            menu_date: menu.menu_date,
            status: menu.status.to_string(),
            created_at: menu.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SelectionItemResponse {
    pub product_id: String,
    /// Category slug
    pub category: String,
    pub product_name: String,
    pub order: u32,
}

impl SelectionItemResponse {
    fn from_row(row: MenuSelection) -> Option<Self> {
        let category = row.category()?;
        Some(Self {
            product_id: row.product_id.to_string(),
            category: category.slug().to_string(),
            product_name: row.product_name_snapshot,
            order: row.order,
        })
    }

    fn from_selection(selection: &Selection) -> Vec<Self> {
        selection
            .iter()
            .flat_map(|(category, products)| {
                products
                    .iter()
                    .enumerate()
                    .map(move |(order, product)| Self {
                        product_id: product.id.to_string(),
                        category: category.slug().to_string(),
                        product_name: product.name.clone(),
                        order: order as u32,
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProteinQuantityResponse {
    pub product_id: String,
    pub planned_quantity: u32,
    pub unit_type: String,
}

impl From<PersistedProteinQuantity> for ProteinQuantityResponse {
    fn from(quantity: PersistedProteinQuantity) -> Self {
        Self {
            product_id: quantity.product_id.to_string(),
            planned_quantity: quantity.planned_quantity,
            unit_type: quantity.unit_type,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoadedMenuResponse {
    pub menu: DailyMenuResponse,
    pub items: Vec<SelectionItemResponse>,
    pub protein_quantities: Vec<ProteinQuantityResponse>,
    pub combinations: Vec<CombinationResponse>,
}

impl From<LoadedMenu> for LoadedMenuResponse {
    fn from(loaded: LoadedMenu) -> Self {
        Self {
            menu: loaded.menu.into(),
            items: loaded
                .selections
                .into_iter()
                .filter_map(SelectionItemResponse::from_row)
                .collect(),
            protein_quantities: loaded
                .protein_quantities
                .into_iter()
                .map(Into::into)
                .collect(),
            combinations: loaded.combinations.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CommittedMenuResponse {
    pub menu: DailyMenuResponse,
    pub combinations: Vec<CombinationResponse>,
    /// not_requested, saved or failed
    pub template_status: String,
    #[oai(skip_serializing_if_is_none)]
    pub template_id: Option<String>,
    /// Why the template could not be written. The menu itself was saved.
    #[oai(skip_serializing_if_is_none)]
    pub template_error: Option<String>,
}

impl From<CommittedMenu> for CommittedMenuResponse {
    fn from(committed: CommittedMenu) -> Self {
        let (template_status, template_id, template_error) = match committed.template {
            TemplateOutcome::NotRequested => ("not_requested", None, None),
            TemplateOutcome::Saved(template) => ("saved", Some(template.id.to_string()), None),
            TemplateOutcome::Failed(reason) => ("failed", None, Some(reason)),
        };
        Self {
            menu: committed.menu.into(),
            combinations: committed
                .combinations
                .into_iter()
                .map(Into::into)
                .collect(),
            template_status: template_status.to_string(),
            template_id,
            template_error,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuSelectionResponse {
    pub menu_price: f64,
    pub items: Vec<SelectionItemResponse>,
    pub protein_quantities: Vec<ProteinQuantityRequest>,
}

impl From<MenuSelectionSnapshot> for MenuSelectionResponse {
    fn from(snapshot: MenuSelectionSnapshot) -> Self {
        let protein_quantities = snapshot
            .selection
            .products(MenuCategory::Proteinas)
            .iter()
            .map(|product| ProteinQuantityRequest {
                product_id: product.id.to_string(),
                planned_quantity: snapshot.protein_quantities.get_or_default(product.id),
            })
            .collect();
        Self {
            menu_price: snapshot.menu_price,
            items: SelectionItemResponse::from_selection(&snapshot.selection),
            protein_quantities,
        }
    }
}
