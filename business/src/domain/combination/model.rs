use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CombinationError;
use crate::domain::daily_menu::model::is_valid_price;

/// One sellable pairing of a principio and a proteína, plus shared sides.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCombination {
    pub id: Uuid,
    pub daily_menu_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub principio_product_id: Uuid,
    pub proteina_product_id: Uuid,
    pub entrada_product_id: Option<Uuid>,
    pub bebida_product_id: Option<Uuid>,
    pub side_product_ids: Vec<Uuid>,
    pub planned_quantity: u32,
    pub available: bool,
    pub favorite: bool,
    pub special: bool,
    pub created_at: DateTime<Utc>,
}

/// Boolean flags the operator can flip independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationFlag {
    Favorite,
    Special,
}

impl std::fmt::Display for CombinationFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationFlag::Favorite => write!(f, "favorite"),
            CombinationFlag::Special => write!(f, "special"),
        }
    }
}

/// Partial edit of a combination. Favorite and special flags are not editable here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl CombinationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available.is_none()
    }

    pub fn validate(&self) -> Result<(), CombinationError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(CombinationError::NameEmpty);
        }
        if let Some(price) = self.price
            && !is_valid_price(price)
        {
            return Err(CombinationError::InvalidPrice);
        }
        Ok(())
    }

    /// Trims the name so storage receives the value the operator sees.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|name| name.trim().to_string());
        self
    }
}

impl GeneratedCombination {
    /// Applies a validated patch, touching only the fields it carries.
    pub fn apply(&mut self, patch: CombinationPatch) -> Result<(), CombinationError> {
        patch.validate()?;

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        Ok(())
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    pub fn toggle_special(&mut self) {
        self.special = !self.special;
    }

    pub fn toggle(&mut self, flag: CombinationFlag) {
        match flag {
            CombinationFlag::Favorite => self.toggle_favorite(),
            CombinationFlag::Special => self.toggle_special(),
        }
    }
}
