use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::MenuError;
use crate::domain::category::model::MenuCategory;
use crate::domain::combination::model::GeneratedCombination;
use crate::domain::shared::value_objects::RestaurantId;

pub const PROTEIN_UNIT_TYPE: &str = "porciones";

/// Prices must be finite and strictly positive.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for MenuStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuStatus::Active => write!(f, "active"),
            MenuStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for MenuStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MenuStatus::Active),
            "inactive" => Ok(MenuStatus::Inactive),
            _ => Err(format!("Invalid menu status: {}", s)),
        }
    }
}

/// Dated, priced menu of the day. At most one is active per restaurant and date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMenu {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub menu_price: f64,
    pub menu_date: NaiveDate,
    pub status: MenuStatus,
    pub created_at: DateTime<Utc>,
}

impl DailyMenu {
    pub fn new(
        restaurant_id: RestaurantId,
        menu_price: f64,
        menu_date: NaiveDate,
    ) -> Result<Self, MenuError> {
        if !is_valid_price(menu_price) {
            return Err(MenuError::InvalidPrice);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            restaurant_id,
            menu_price,
            menu_date,
            status: MenuStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        restaurant_id: RestaurantId,
        menu_price: f64,
        menu_date: NaiveDate,
        status: MenuStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            menu_price,
            menu_date,
            status,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MenuStatus::Active
    }
}

/// Persisted projection of one selected product.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSelection {
    pub daily_menu_id: Uuid,
    pub product_id: Uuid,
    pub category_external_id: Uuid,
    pub category_name: String,
    pub product_name_snapshot: String,
    pub order: u32,
}

impl MenuSelection {
    pub fn category(&self) -> Option<MenuCategory> {
        MenuCategory::from_external_id(self.category_external_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistedProteinQuantity {
    pub daily_menu_id: Uuid,
    pub product_id: Uuid,
    pub planned_quantity: u32,
    pub unit_type: String,
}

/// Everything written by one commit, in write order.
#[derive(Debug, Clone)]
pub struct MenuComposition {
    pub menu: DailyMenu,
    pub selections: Vec<MenuSelection>,
    pub protein_quantities: Vec<PersistedProteinQuantity>,
    pub combinations: Vec<GeneratedCombination>,
}

/// Active menu together with the rows needed to re-seed a composing session.
#[derive(Debug, Clone)]
pub struct LoadedMenu {
    pub menu: DailyMenu,
    pub selections: Vec<MenuSelection>,
    pub protein_quantities: Vec<PersistedProteinQuantity>,
    pub combinations: Vec<GeneratedCombination>,
}
