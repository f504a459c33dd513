use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::combination::model::GeneratedCombination;

use crate::numeric::{from_count, from_numeric};

#[derive(Debug, FromRow)]
pub struct CombinationEntity {
    pub id: Uuid,
    pub daily_menu_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub principio_product_id: Uuid,
    pub proteina_product_id: Uuid,
    pub entrada_product_id: Option<Uuid>,
    pub bebida_product_id: Option<Uuid>,
    pub side_product_ids: Vec<Uuid>,
    pub planned_quantity: i32,
    pub available: bool,
    pub favorite: bool,
    pub special: bool,
    pub created_at: DateTime<Utc>,
}

impl CombinationEntity {
    pub fn into_domain(self) -> GeneratedCombination {
        GeneratedCombination {
            id: self.id,
            daily_menu_id: self.daily_menu_id,
            name: self.name,
            description: self.description,
            price: from_numeric(&self.price),
            principio_product_id: self.principio_product_id,
            proteina_product_id: self.proteina_product_id,
            entrada_product_id: self.entrada_product_id,
            bebida_product_id: self.bebida_product_id,
            side_product_ids: self.side_product_ids,
            planned_quantity: from_count(self.planned_quantity),
            available: self.available,
            favorite: self.favorite,
            special: self.special,
            created_at: self.created_at,
        }
    }
}
