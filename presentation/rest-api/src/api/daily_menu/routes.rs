use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::daily_menu::use_cases::commit::CommitMenuUseCase;
use business::domain::daily_menu::use_cases::get_selection::{
    GetMenuSelectionParams, GetMenuSelectionUseCase,
};
use business::domain::daily_menu::use_cases::load_active::{
    LoadActiveMenuParams, LoadActiveMenuUseCase,
};

use crate::api::daily_menu::dto::{
    CommitMenuRequest, CommittedMenuResponse, LoadedMenuResponse, MenuSelectionResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::RestaurantAuth;
use crate::api::tags::ApiTags;

pub struct DailyMenuApi {
    load_active_use_case: Arc<dyn LoadActiveMenuUseCase>,
    commit_use_case: Arc<dyn CommitMenuUseCase>,
    get_selection_use_case: Arc<dyn GetMenuSelectionUseCase>,
}

impl DailyMenuApi {
    pub fn new(
        load_active_use_case: Arc<dyn LoadActiveMenuUseCase>,
        commit_use_case: Arc<dyn CommitMenuUseCase>,
        get_selection_use_case: Arc<dyn GetMenuSelectionUseCase>,
    ) -> Self {
        Self {
            load_active_use_case,
            commit_use_case,
            get_selection_use_case,
        }
    }
}

/// Daily menu composition
#[OpenApi]
impl DailyMenuApi {
    /// Get today's active menu
    ///
    /// Returns the menu with its selected products, planned protein quantities and
    /// generated combinations.
    #[oai(path = "/daily-menus/active", method = "get", tag = "ApiTags::DailyMenus")]
    async fn get_active(&self, auth: RestaurantAuth) -> GetActiveMenuResponse {
        match self
            .load_active_use_case
            .execute(LoadActiveMenuParams {
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(Some(loaded)) => GetActiveMenuResponse::Ok(Json(loaded.into())),
            Ok(None) => {
                GetActiveMenuResponse::NotFound(ErrorResponse::not_found("menu.not_found"))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetActiveMenuResponse::NotFound(json),
                    _ => GetActiveMenuResponse::InternalError(json),
                }
            }
        }
    }

    /// Commit a daily menu
    ///
    /// Validates the selection, replaces today's active menu and, unless
    /// `generate_combinations` is false, generates one combination per principio and
    /// proteína pair. A failed template write does not fail the request; it is reported
    /// in `template_status`.
    #[oai(path = "/daily-menus", method = "post", tag = "ApiTags::DailyMenus")]
    async fn commit(
        &self,
        auth: RestaurantAuth,
        body: Json<CommitMenuRequest>,
    ) -> CommitMenuResponse {
        let params = match body.0.into_params(auth.0) {
            Ok(params) => params,
            Err(message) => {
                return CommitMenuResponse::BadRequest(ErrorResponse::validation(message));
            }
        };

        match self.commit_use_case.execute(params).await {
            Ok(committed) => CommitMenuResponse::Created(Json(committed.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CommitMenuResponse::BadRequest(json),
                    409 => CommitMenuResponse::Conflict(json),
                    _ => CommitMenuResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the persisted selection of a menu
    ///
    /// Used to re-open a menu in the composition wizard.
    #[oai(
        path = "/daily-menus/:id/selection",
        method = "get",
        tag = "ApiTags::DailyMenus"
    )]
    async fn get_selection(&self, auth: RestaurantAuth, id: Path<String>) -> GetSelectionResponse {
        let Ok(daily_menu_id) = Uuid::parse_str(&id.0) else {
            return GetSelectionResponse::BadRequest(ErrorResponse::validation("menu.invalid_id"));
        };

        match self
            .get_selection_use_case
            .execute(GetMenuSelectionParams {
                daily_menu_id,
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(snapshot) => GetSelectionResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSelectionResponse::NotFound(json),
                    _ => GetSelectionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetActiveMenuResponse {
    #[oai(status = 200)]
    Ok(Json<LoadedMenuResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CommitMenuResponse {
    #[oai(status = 201)]
    Created(Json<CommittedMenuResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSelectionResponse {
    #[oai(status = 200)]
    Ok(Json<MenuSelectionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
