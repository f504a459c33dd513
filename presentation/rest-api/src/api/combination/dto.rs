use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::combination::filter::{Availability, CombinationFilter, CombinationSort};
use business::domain::combination::model::{CombinationPatch, GeneratedCombination};

#[derive(Debug, Clone, Object)]
pub struct CombinationResponse {
    pub id: String,
    pub daily_menu_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub principio_product_id: String,
    pub proteina_product_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub entrada_product_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub bebida_product_id: Option<String>,
    pub side_product_ids: Vec<String>,
    /// Planned portions of the combination's proteína
    pub planned_quantity: u32,
    pub available: bool,
    pub favorite: bool,
    pub special: bool,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedCombination> for CombinationResponse {
    fn from(combination: GeneratedCombination) -> Self {
        Self {
            id: combination.id.to_string(),
            daily_menu_id: combination.daily_menu_id.to_string(),
            name: combination.name,
            description: combination.description,
            price: combination.price,
            principio_product_id: combination.principio_product_id.to_string(),
            proteina_product_id: combination.proteina_product_id.to_string(),
            entrada_product_id: combination.entrada_product_id.map(|id| id.to_string()),
            bebida_product_id: combination.bebida_product_id.map(|id| id.to_string()),
            side_product_ids: combination
                .side_product_ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
            planned_quantity: combination.planned_quantity,
            available: combination.available,
            favorite: combination.favorite,
            special: combination.special,
            created_at: combination.created_at,
        }
    }
}

/// Partial edit. Omitted fields keep their value.
#[derive(Debug, Clone, Object)]
pub struct UpdateCombinationRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub available: Option<bool>,
}

impl From<UpdateCombinationRequest> for CombinationPatch {
    fn from(request: UpdateCombinationRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            available: request.available,
        }
    }
}

/// Raw filter query values, parsed into a domain filter.
pub struct CombinationQuery {
    pub search: Option<String>,
    pub favorites_only: Option<bool>,
    pub specials_only: Option<bool>,
    pub availability: Option<String>,
    pub sort_by: Option<String>,
}

impl CombinationQuery {
    pub fn into_filter(self) -> Result<CombinationFilter, &'static str> {
        let availability = match self.availability.as_deref() {
            Some(value) => value
                .parse::<Availability>()
                .map_err(|_| "combination.invalid_availability")?,
            None => Availability::All,
        };
        let sort_by = match self.sort_by.as_deref() {
            Some(value) => value
                .parse::<CombinationSort>()
                .map_err(|_| "combination.invalid_sort")?,
            None => CombinationSort::Name,
        };

        Ok(CombinationFilter {
            search_text: self.search.unwrap_or_default(),
            favorites_only: self.favorites_only.unwrap_or(false),
            specials_only: self.specials_only.unwrap_or(false),
            availability,
            sort_by,
        })
    }
}
