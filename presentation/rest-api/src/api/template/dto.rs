use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::template::model::{MenuTemplate, MenuTemplateItem};

use crate::api::daily_menu::dto::SelectionItemRequest;

#[derive(Debug, Clone, Object)]
pub struct CreateTemplateRequest {
    pub template_name: String,
    pub items: Vec<SelectionItemRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct TemplateItemResponse {
    pub product_id: String,
    /// Category slug, absent when the stored category is unknown
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub product_name: Option<String>,
}

impl From<MenuTemplateItem> for TemplateItemResponse {
    fn from(item: MenuTemplateItem) -> Self {
        Self {
            category: item.category().map(|c| c.slug().to_string()),
            product_id: item.product_id.to_string(),
            product_name: item.product_name_snapshot,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TemplateResponse {
    pub id: String,
    pub template_name: String,
    pub items: Vec<TemplateItemResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<MenuTemplate> for TemplateResponse {
    fn from(template: MenuTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            template_name: template.template_name,
            items: template.items.into_iter().map(Into::into).collect(),
            created_at: template.created_at,
        }
    }
}
