use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::combination::use_cases::delete::{
    DeleteCombinationParams, DeleteCombinationUseCase,
};
use business::domain::combination::use_cases::get_by_menu::{
    GetCombinationsParams, GetCombinationsUseCase,
};
use business::domain::combination::use_cases::toggle_flag::{
    CombinationFlag, ToggleCombinationFlagParams, ToggleCombinationFlagUseCase,
};
use business::domain::combination::use_cases::update::{
    UpdateCombinationParams, UpdateCombinationUseCase,
};

use crate::api::combination::dto::{
    CombinationQuery, CombinationResponse, UpdateCombinationRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::RestaurantAuth;
use crate::api::tags::ApiTags;

pub struct CombinationApi {
    get_by_menu_use_case: Arc<dyn GetCombinationsUseCase>,
    update_use_case: Arc<dyn UpdateCombinationUseCase>,
    toggle_flag_use_case: Arc<dyn ToggleCombinationFlagUseCase>,
    delete_use_case: Arc<dyn DeleteCombinationUseCase>,
}

impl CombinationApi {
    pub fn new(
        get_by_menu_use_case: Arc<dyn GetCombinationsUseCase>,
        update_use_case: Arc<dyn UpdateCombinationUseCase>,
        toggle_flag_use_case: Arc<dyn ToggleCombinationFlagUseCase>,
        delete_use_case: Arc<dyn DeleteCombinationUseCase>,
    ) -> Self {
        Self {
            get_by_menu_use_case,
            update_use_case,
            toggle_flag_use_case,
            delete_use_case,
        }
    }

    async fn toggle(
        &self,
        auth: RestaurantAuth,
        id: &str,
        flag: CombinationFlag,
    ) -> CombinationMutationResponse {
        let Ok(id) = Uuid::parse_str(id) else {
            return CombinationMutationResponse::BadRequest(ErrorResponse::validation(
                "combination.invalid_id",
            ));
        };

        let params = ToggleCombinationFlagParams {
            id,
            restaurant_id: auth.0,
            flag,
        };
        match self.toggle_flag_use_case.execute(params).await {
            Ok(combination) => CombinationMutationResponse::Ok(Json(combination.into())),
            Err(err) => CombinationMutationResponse::from_error(err.into_error_response()),
        }
    }
}

/// Generated combinations of a daily menu
#[OpenApi]
impl CombinationApi {
    /// List combinations of a menu
    ///
    /// Optional filters: case-insensitive `search` on the name, `favorites_only`,
    /// `specials_only`, `availability` (all, available, unavailable) and `sort_by`
    /// (name, price, created_at).
    #[oai(
        path = "/daily-menus/:id/combinations",
        method = "get",
        tag = "ApiTags::Combinations"
    )]
    #[allow(clippy::too_many_arguments)]
    async fn get_by_menu(
        &self,
        auth: RestaurantAuth,
        id: Path<String>,
        search: Query<Option<String>>,
        favorites_only: Query<Option<bool>>,
        specials_only: Query<Option<bool>>,
        availability: Query<Option<String>>,
        sort_by: Query<Option<String>>,
    ) -> GetCombinationsResponse {
        let Ok(daily_menu_id) = Uuid::parse_str(&id.0) else {
            return GetCombinationsResponse::BadRequest(ErrorResponse::validation(
                "menu.invalid_id",
            ));
        };
        let filter = match (CombinationQuery {
            search: search.0,
            favorites_only: favorites_only.0,
            specials_only: specials_only.0,
            availability: availability.0,
            sort_by: sort_by.0,
        })
        .into_filter()
        {
            Ok(filter) => filter,
            Err(message) => {
                return GetCombinationsResponse::BadRequest(ErrorResponse::validation(message));
            }
        };

        match self
            .get_by_menu_use_case
            .execute(GetCombinationsParams {
                daily_menu_id,
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(combinations) => GetCombinationsResponse::Ok(Json(
                filter
                    .apply(&combinations)
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCombinationsResponse::NotFound(json),
                    _ => GetCombinationsResponse::InternalError(json),
                }
            }
        }
    }

    /// Edit a combination
    ///
    /// Changes name, description, price or availability. Favorite and special flags have
    /// their own endpoints.
    #[oai(
        path = "/combinations/:id",
        method = "patch",
        tag = "ApiTags::Combinations"
    )]
    async fn update(
        &self,
        auth: RestaurantAuth,
        id: Path<String>,
        body: Json<UpdateCombinationRequest>,
    ) -> CombinationMutationResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CombinationMutationResponse::BadRequest(ErrorResponse::validation(
                "combination.invalid_id",
            ));
        };

        let params = UpdateCombinationParams {
            id,
            restaurant_id: auth.0,
            patch: body.0.into(),
        };
        match self.update_use_case.execute(params).await {
            Ok(combination) => CombinationMutationResponse::Ok(Json(combination.into())),
            Err(err) => CombinationMutationResponse::from_error(err.into_error_response()),
        }
    }

    /// Toggle favorite
    #[oai(
        path = "/combinations/:id/favorite",
        method = "post",
        tag = "ApiTags::Combinations"
    )]
    async fn toggle_favorite(
        &self,
        auth: RestaurantAuth,
        id: Path<String>,
    ) -> CombinationMutationResponse {
        self.toggle(auth, &id.0, CombinationFlag::Favorite).await
    }

    /// Toggle special
    #[oai(
        path = "/combinations/:id/special",
        method = "post",
        tag = "ApiTags::Combinations"
    )]
    async fn toggle_special(
        &self,
        auth: RestaurantAuth,
        id: Path<String>,
    ) -> CombinationMutationResponse {
        self.toggle(auth, &id.0, CombinationFlag::Special).await
    }

    /// Delete a combination
    ///
    /// The caller is expected to have confirmed the deletion with the operator.
    #[oai(
        path = "/combinations/:id",
        method = "delete",
        tag = "ApiTags::Combinations"
    )]
    async fn delete(&self, auth: RestaurantAuth, id: Path<String>) -> DeleteCombinationResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteCombinationResponse::BadRequest(ErrorResponse::validation(
                "combination.invalid_id",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteCombinationParams {
                id,
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(()) => DeleteCombinationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCombinationResponse::NotFound(json),
                    _ => DeleteCombinationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCombinationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CombinationResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CombinationMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CombinationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CombinationMutationResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCombinationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
