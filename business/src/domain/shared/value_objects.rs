use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the restaurant owning every menu, template and usage record.
/// Every query in this crate is scoped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(Uuid);

impl RestaurantId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RestaurantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_restaurant_id_from_str() {
        let id = RestaurantId::parse("8c1f2a4e-3b5d-4c6e-9f70-112233445566");
        assert!(id.is_some());
        assert_eq!(
            id.unwrap().to_string(),
            "8c1f2a4e-3b5d-4c6e-9f70-112233445566"
        );
    }

    #[test]
    fn should_reject_restaurant_id_when_not_a_uuid() {
        assert!(RestaurantId::parse("restaurant-1").is_none());
        assert!(RestaurantId::parse("").is_none());
    }

    #[test]
    fn should_compare_restaurant_ids_for_equality() {
        let uuid = Uuid::new_v4();
        assert_eq!(RestaurantId::new(uuid), RestaurantId::from(uuid));
        assert_ne!(RestaurantId::new(uuid), RestaurantId::new(Uuid::new_v4()));
    }
}
