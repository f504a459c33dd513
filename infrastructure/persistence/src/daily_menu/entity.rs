use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::daily_menu::model::{
    DailyMenu, MenuSelection, MenuStatus, PersistedProteinQuantity,
};
use business::domain::shared::value_objects::RestaurantId;

use crate::numeric::{from_count, from_numeric};

#[derive(Debug, FromRow)]
pub struct DailyMenuEntity {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub menu_price: BigDecimal,
    pub menu_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DailyMenuEntity {
    pub fn into_domain(self) -> DailyMenu {
        DailyMenu::from_repository(
            self.id,
            RestaurantId::new(self.restaurant_id),
            from_numeric(&self.menu_price),
            self.menu_date,
            self.status
                .parse::<MenuStatus>()
                .unwrap_or(MenuStatus::Inactive),
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct MenuSelectionEntity {
    pub daily_menu_id: Uuid,
    pub product_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub product_name_snapshot: String,
    pub selection_order: i32,
}

impl MenuSelectionEntity {
    pub fn into_domain(self) -> MenuSelection {
        MenuSelection {
            daily_menu_id: self.daily_menu_id,
            product_id: self.product_id,
            category_external_id: self.category_id,
            category_name: self.category_name,
            product_name_snapshot: self.product_name_snapshot,
            order: from_count(self.selection_order),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProteinQuantityEntity {
    pub daily_menu_id: Uuid,
    pub product_id: Uuid,
    pub planned_quantity: i32,
    pub unit_type: String,
}

impl ProteinQuantityEntity {
    pub fn into_domain(self) -> PersistedProteinQuantity {
        PersistedProteinQuantity {
            daily_menu_id: self.daily_menu_id,
            product_id: self.product_id,
            planned_quantity: from_count(self.planned_quantity).max(1),
            unit_type: self.unit_type,
        }
    }
}
