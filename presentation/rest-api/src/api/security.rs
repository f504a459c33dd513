use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::shared::value_objects::RestaurantId;

pub const RESTAURANT_HEADER: &str = "X-Restaurant-Id";

/// Restaurant resolved by the embedding back-office and forwarded on every request.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Restaurant-Id",
    key_in = "header",
    checker = "restaurant_checker"
)]
pub struct RestaurantAuth(pub RestaurantId);

async fn restaurant_checker(_req: &Request, api_key: ApiKey) -> Option<RestaurantId> {
    let restaurant_id = RestaurantId::parse(&api_key.key);
    if restaurant_id.is_none() {
        tracing::warn!("Rejected malformed {} header", RESTAURANT_HEADER);
    }
    restaurant_id
}
