use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::catalog::model::{Product, UsageRecord};
use business::domain::category::model::MenuCategory;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Client-side identifier, 1 to 5 in wizard order
    pub local_id: u8,
    /// Catalog identifier used to query products
    pub external_id: String,
    /// Display name
    pub name: String,
    pub slug: String,
    pub icon: String,
    /// Portions planned by default for products of this category
    pub default_planned_quantity: u32,
    /// Price suggested by the category picker
    pub default_price: f64,
}

impl From<MenuCategory> for CategoryResponse {
    fn from(category: MenuCategory) -> Self {
        Self {
            local_id: category.local_id(),
            external_id: category.external_id().to_string(),
            name: category.display_name().to_string(),
            slug: category.slug().to_string(),
            icon: category.icon().to_string(),
            default_planned_quantity: category.default_planned_quantity(),
            default_price: category.default_price(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub category_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub suggested_price_min: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub suggested_price_max: Option<f64>,
    /// Minimum suggested price, zero when unknown
    pub effective_price: f64,
    /// Popularity above the special threshold
    pub special: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            effective_price: product.effective_price(),
            special: product.is_special(),
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            category_id: product.category_external_id.to_string(),
            suggested_price_min: product.suggested_price_min,
            suggested_price_max: product.suggested_price_max,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UsageRecordResponse {
    pub product_id: String,
    pub product_name: String,
    /// Category slug
    pub category: String,
    pub times_used: u32,
    #[oai(skip_serializing_if_is_none)]
    pub last_used_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub restaurant_price: Option<f64>,
}

impl UsageRecordResponse {
    pub fn new(category: MenuCategory, record: &UsageRecord) -> Self {
        Self {
            product_id: record.product_id.to_string(),
            product_name: record.product_name.clone(),
            category: category.slug().to_string(),
            times_used: record.times_used,
            last_used_date: record.last_used_date,
            restaurant_price: record.restaurant_price,
        }
    }
}
