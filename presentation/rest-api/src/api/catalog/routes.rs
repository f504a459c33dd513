use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::model::DEFAULT_QUICK_PICKS;
use business::domain::catalog::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::catalog::use_cases::get_usage_history::{
    GetUsageHistoryParams, GetUsageHistoryUseCase,
};
use business::domain::category::model::MenuCategory;

use crate::api::catalog::dto::{CategoryResponse, ProductResponse, UsageRecordResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::RestaurantAuth;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    get_usage_history_use_case: Arc<dyn GetUsageHistoryUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        get_usage_history_use_case: Arc<dyn GetUsageHistoryUseCase>,
    ) -> Self {
        Self {
            get_products_use_case,
            get_usage_history_use_case,
        }
    }
}

/// Menu categories, catalog products and usage history
#[OpenApi]
impl CatalogApi {
    /// List menu categories
    ///
    /// The five fixed categories in wizard order.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> Json<Vec<CategoryResponse>> {
        Json(MenuCategory::ALL.into_iter().map(Into::into).collect())
    }

    /// List products of a category
    ///
    /// Verified catalog products of the category identified by its local id (1 to 5).
    #[oai(
        path = "/categories/:local_id/products",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn get_products(&self, local_id: Path<u8>) -> GetProductsResponse {
        let Some(category) = MenuCategory::from_local_id(local_id.0) else {
            return GetProductsResponse::NotFound(ErrorResponse::not_found("category.not_found"));
        };

        match self
            .get_products_use_case
            .execute(GetProductsByCategoryParams { category })
            .await
        {
            Ok(products) => {
                GetProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductsResponse::NotFound(json),
                    _ => GetProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Restaurant usage history
    ///
    /// Previously used products ranked by times used, then recency. With `category`, only
    /// that category's quick picks are returned (at most `limit`, default 5).
    #[oai(path = "/usage-history", method = "get", tag = "ApiTags::Catalog")]
    async fn get_usage_history(
        &self,
        auth: RestaurantAuth,
        category: Query<Option<String>>,
        limit: Query<Option<u32>>,
    ) -> GetUsageHistoryResponse {
        let category = match category.0.as_deref().map(str::parse::<MenuCategory>) {
            None => None,
            Some(Ok(category)) => Some(category),
            Some(Err(_)) => {
                return GetUsageHistoryResponse::BadRequest(ErrorResponse::validation(
                    "category.invalid",
                ));
            }
        };

        let history = match self
            .get_usage_history_use_case
            .execute(GetUsageHistoryParams {
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(history) => history,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetUsageHistoryResponse::InternalError(json);
            }
        };

        let records = match category {
            Some(category) => {
                let limit = limit.0.map_or(DEFAULT_QUICK_PICKS, |l| l as usize);
                history
                    .quick_picks(category, limit)
                    .iter()
                    .map(|r| UsageRecordResponse::new(category, r))
                    .collect()
            }
            None => MenuCategory::ALL
                .into_iter()
                .flat_map(|c| {
                    history
                        .for_category(c)
                        .iter()
                        .map(move |r| UsageRecordResponse::new(c, r))
                })
                .collect(),
        };
        GetUsageHistoryResponse::Ok(Json(records))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUsageHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UsageRecordResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
