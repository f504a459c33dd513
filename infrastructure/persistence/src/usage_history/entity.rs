use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::UsageRecord;

use crate::numeric::{from_count, from_numeric};

#[derive(Debug, FromRow)]
pub struct UsageRecordEntity {
    pub product_id: Uuid,
    pub product_name: String,
    pub category_name: String,
    pub times_used: i32,
    pub last_used_date: Option<NaiveDate>,
    pub restaurant_price: Option<BigDecimal>,
}

impl UsageRecordEntity {
    pub fn into_domain(self) -> UsageRecord {
        UsageRecord {
            product_id: self.product_id,
            product_name: self.product_name,
            category_name: self.category_name,
            times_used: from_count(self.times_used),
            last_used_date: self.last_used_date,
            restaurant_price: self.restaurant_price.as_ref().map(from_numeric),
        }
    }
}
