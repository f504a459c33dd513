use std::cmp::Ordering;

use super::model::GeneratedCombination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    All,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinationSort {
    #[default]
    Name,
    Price,
    /// Newest first.
    CreatedAt,
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Availability::All),
            "available" => Ok(Availability::Available),
            "unavailable" => Ok(Availability::Unavailable),
            _ => Err(format!("Invalid availability: {}", s)),
        }
    }
}

impl std::str::FromStr for CombinationSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(CombinationSort::Name),
            "price" => Ok(CombinationSort::Price),
            "created_at" => Ok(CombinationSort::CreatedAt),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

/// Search, flag filters and ordering over the combinations of a menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinationFilter {
    pub search_text: String,
    pub favorites_only: bool,
    pub specials_only: bool,
    pub availability: Availability,
    pub sort_by: CombinationSort,
}

impl CombinationFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Default::default()
        }
    }

    pub fn matches(&self, combination: &GeneratedCombination) -> bool {
        let needle = self.search_text.to_lowercase();
        if !needle.is_empty() && !combination.name.to_lowercase().contains(&needle) {
            return false;
        }
        if self.favorites_only && !combination.favorite {
            return false;
        }
        if self.specials_only && !combination.special {
            return false;
        }
        match self.availability {
            Availability::All => true,
            Availability::Available => combination.available,
            Availability::Unavailable => !combination.available,
        }
    }

    pub fn apply(&self, combinations: &[GeneratedCombination]) -> Vec<GeneratedCombination> {
        let mut result: Vec<GeneratedCombination> = combinations
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();
        result.sort_by(|a, b| self.compare(a, b));
        result
    }

    fn compare(&self, a: &GeneratedCombination, b: &GeneratedCombination) -> Ordering {
        match self.sort_by {
            CombinationSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            CombinationSort::Price => a.price.total_cmp(&b.price),
            CombinationSort::CreatedAt => b.created_at.cmp(&a.created_at),
        }
    }
}
