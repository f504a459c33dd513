use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

use business::domain::errors::RepositoryError;

/// Prices are stored as NUMERIC(12, 2).
pub fn to_numeric(value: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(value)
        .map(|decimal| decimal.round(2))
        .ok_or(RepositoryError::DatabaseError)
}

pub fn from_numeric(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

pub fn to_count(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Negative counts never come from this crate; they read as zero.
pub fn from_count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or_default()
}
