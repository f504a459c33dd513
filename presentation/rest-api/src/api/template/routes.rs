use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::template::use_cases::create::{
    CreateMenuTemplateParams, CreateMenuTemplateUseCase,
};
use business::domain::template::use_cases::get_all::{
    GetMenuTemplatesParams, GetMenuTemplatesUseCase,
};

use crate::api::daily_menu::dto::selection_from_items;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::RestaurantAuth;
use crate::api::tags::ApiTags;
use crate::api::template::dto::{CreateTemplateRequest, TemplateResponse};

pub struct TemplateApi {
    create_use_case: Arc<dyn CreateMenuTemplateUseCase>,
    get_all_use_case: Arc<dyn GetMenuTemplatesUseCase>,
}

impl TemplateApi {
    pub fn new(
        create_use_case: Arc<dyn CreateMenuTemplateUseCase>,
        get_all_use_case: Arc<dyn GetMenuTemplatesUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

/// Reusable menu templates
#[OpenApi]
impl TemplateApi {
    /// List templates, newest first
    #[oai(path = "/templates", method = "get", tag = "ApiTags::Templates")]
    async fn get_all(&self, auth: RestaurantAuth) -> GetTemplatesResponse {
        match self
            .get_all_use_case
            .execute(GetMenuTemplatesParams {
                restaurant_id: auth.0,
            })
            .await
        {
            Ok(templates) => {
                GetTemplatesResponse::Ok(Json(templates.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTemplatesResponse::InternalError(json)
            }
        }
    }

    /// Save a template
    #[oai(path = "/templates", method = "post", tag = "ApiTags::Templates")]
    async fn create(
        &self,
        auth: RestaurantAuth,
        body: Json<CreateTemplateRequest>,
    ) -> CreateTemplateResponse {
        let CreateTemplateRequest {
            template_name,
            items,
        } = body.0;
        let selection = match selection_from_items(items) {
            Ok(selection) => selection,
            Err(message) => {
                return CreateTemplateResponse::BadRequest(ErrorResponse::validation(message));
            }
        };

        match self
            .create_use_case
            .execute(CreateMenuTemplateParams {
                restaurant_id: auth.0,
                template_name,
                selection,
            })
            .await
        {
            Ok(template) => CreateTemplateResponse::Created(Json(template.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTemplateResponse::BadRequest(json),
                    _ => CreateTemplateResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTemplatesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TemplateResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTemplateResponse {
    #[oai(status = 201)]
    Created(Json<TemplateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
