use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::Product;

use crate::numeric::from_numeric;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub suggested_price_min: Option<BigDecimal>,
    pub suggested_price_max: Option<BigDecimal>,
    pub popularity_score: Option<BigDecimal>,
    pub verified: bool,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            category_external_id: self.category_id,
            suggested_price_min: self.suggested_price_min.as_ref().map(from_numeric),
            suggested_price_max: self.suggested_price_max.as_ref().map(from_numeric),
            popularity_score: self.popularity_score.as_ref().map(from_numeric),
            verified: self.verified,
        }
    }
}
