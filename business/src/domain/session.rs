use async_trait::async_trait;

use super::shared::value_objects::RestaurantId;

/// Identity of the operator currently using the back-office.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// Session port. Restaurant identity is resolved outside this crate.
#[async_trait]
pub trait SessionService: Send + Sync {
    async fn get_user_profile(&self) -> Option<UserProfile>;
    async fn get_user_restaurant(&self) -> Option<RestaurantId>;
}
