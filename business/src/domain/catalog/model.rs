use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::category::model::MenuCategory;

/// Popularity above which a product is flagged as special.
pub const SPECIAL_POPULARITY_THRESHOLD: f64 = 80.0;

/// Verified product as listed by the product catalog. Read-only for this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_external_id: Uuid,
    pub suggested_price_min: Option<f64>,
    pub suggested_price_max: Option<f64>,
    pub popularity_score: Option<f64>,
    pub verified: bool,
}

impl Product {
    /// Minimal product rebuilt from a persisted name snapshot.
    pub fn from_snapshot(id: Uuid, name: String, category: MenuCategory) -> Self {
        Self {
            id,
            name,
            description: None,
            category_external_id: category.external_id(),
            suggested_price_min: None,
            suggested_price_max: None,
            popularity_score: None,
            verified: true,
        }
    }

    pub fn effective_price(&self) -> f64 {
        self.suggested_price_min.unwrap_or(0.0)
    }

    pub fn is_special(&self) -> bool {
        self.popularity_score
            .is_some_and(|score| score > SPECIAL_POPULARITY_THRESHOLD)
    }

    pub fn category(&self) -> Option<MenuCategory> {
        MenuCategory::from_external_id(self.category_external_id)
    }
}

/// Prior use of a product by a restaurant, maintained outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub product_id: Uuid,
    pub product_name: String,
    pub category_name: String,
    pub times_used: u32,
    pub last_used_date: Option<NaiveDate>,
    pub restaurant_price: Option<f64>,
}

pub const DEFAULT_QUICK_PICKS: usize = 5;

/// Usage history grouped per category and ranked for quick re-selection.
#[derive(Debug, Clone, Default)]
pub struct UsageHistory {
    by_category: BTreeMap<MenuCategory, Vec<UsageRecord>>,
}

impl UsageHistory {
    /// Groups records by category name. Rows with an unknown category are dropped.
    pub fn from_records(records: Vec<UsageRecord>) -> Self {
        let mut by_category: BTreeMap<MenuCategory, Vec<UsageRecord>> = BTreeMap::new();
        for record in records {
            if let Some(category) = MenuCategory::from_display_name(&record.category_name) {
                by_category.entry(category).or_default().push(record);
            }
        }
        for records in by_category.values_mut() {
            records.sort_by(|a, b| {
                b.times_used
                    .cmp(&a.times_used)
                    .then_with(|| b.last_used_date.cmp(&a.last_used_date))
                    .then_with(|| a.product_name.cmp(&b.product_name))
            });
        }
        Self { by_category }
    }

    pub fn for_category(&self, category: MenuCategory) -> &[UsageRecord] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn quick_picks(&self, category: MenuCategory, limit: usize) -> &[UsageRecord] {
        let records = self.for_category(category);
        &records[..records.len().min(limit)]
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Option<f64>, popularity: Option<f64>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Pollo".to_string(),
            description: None,
            category_external_id: MenuCategory::Proteinas.external_id(),
            suggested_price_min: price,
            suggested_price_max: None,
            popularity_score: popularity,
            verified: true,
        }
    }

    fn record(name: &str, category: &str, times: u32, day: u32) -> UsageRecord {
        UsageRecord {
            product_id: Uuid::new_v4(),
            product_name: name.to_string(),
            category_name: category.to_string(),
            times_used: times,
            last_used_date: NaiveDate::from_ymd_opt(2024, 5, day),
            restaurant_price: None,
        }
    }

    #[test]
    fn should_default_effective_price_to_zero_when_no_suggested_min() {
        assert_eq!(product(None, None).effective_price(), 0.0);
        assert_eq!(product(Some(4500.0), None).effective_price(), 4500.0);
    }

    #[test]
    fn should_flag_special_only_above_threshold() {
        assert!(product(None, Some(81.0)).is_special());
        assert!(!product(None, Some(80.0)).is_special());
        assert!(!product(None, None).is_special());
    }

    #[test]
    fn should_rank_usage_by_times_used_then_recency() {
        let history = UsageHistory::from_records(vec![
            record("Res", "Proteínas", 3, 1),
            record("Cerdo", "proteinas", 7, 2),
            record("Pollo", "Proteínas", 3, 9),
            record("Limonada", "Bebidas", 1, 1),
        ]);

        let names: Vec<&str> = history
            .for_category(MenuCategory::Proteinas)
            .iter()
            .map(|r| r.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Cerdo", "Pollo", "Res"]);
        assert_eq!(history.quick_picks(MenuCategory::Proteinas, 2).len(), 2);
        assert_eq!(history.for_category(MenuCategory::Bebidas).len(), 1);
    }

    #[test]
    fn should_skip_records_with_unknown_category() {
        let history = UsageHistory::from_records(vec![record("Flan", "Postres", 4, 1)]);
        assert!(history.is_empty());
        assert!(history.quick_picks(MenuCategory::Entradas, 5).is_empty());
    }
}
