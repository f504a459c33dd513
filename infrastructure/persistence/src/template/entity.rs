use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RestaurantId;
use business::domain::template::model::{MenuTemplate, MenuTemplateItem};

/// JSON shape of one template item. Older rows may lack the category id.
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateItemRow {
    pub product_id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl From<&MenuTemplateItem> for TemplateItemRow {
    fn from(item: &MenuTemplateItem) -> Self {
        Self {
            product_id: item.product_id,
            category_id: item.category_external_id,
            category_name: item.category_name.clone(),
            product_name: item.product_name_snapshot.clone(),
        }
    }
}

impl From<TemplateItemRow> for MenuTemplateItem {
    fn from(row: TemplateItemRow) -> Self {
        Self {
            product_id: row.product_id,
            category_external_id: row.category_id,
            category_name: row.category_name,
            product_name_snapshot: row.product_name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MenuTemplateEntity {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub template_name: String,
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl MenuTemplateEntity {
    pub fn into_domain(self) -> MenuTemplate {
        let items = match serde_json::from_value::<Vec<TemplateItemRow>>(self.items) {
            Ok(rows) => rows.into_iter().map(MenuTemplateItem::from).collect(),
            Err(e) => {
                tracing::warn!(template_id = %self.id, "unreadable template items: {}", e);
                Vec::new()
            }
        };

        MenuTemplate::from_repository(
            self.id,
            RestaurantId::new(self.restaurant_id),
            self.template_name,
            items,
            self.created_at,
        )
    }
}

pub fn items_to_json(items: &[MenuTemplateItem]) -> Result<serde_json::Value, RepositoryError> {
    let rows: Vec<TemplateItemRow> = items.iter().map(TemplateItemRow::from).collect();
    serde_json::to_value(rows).map_err(|_| RepositoryError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::category::model::MenuCategory;
    use serde_json::json;

    fn entity(items: serde_json::Value) -> MenuTemplateEntity {
        MenuTemplateEntity {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            template_name: "Viernes".to_string(),
            items,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_resolve_category_by_name_when_item_lacks_category_id() {
        let product_id = Uuid::new_v4();
        let template = entity(json!([
            { "product_id": product_id, "category_name": "Proteínas" }
        ]))
        .into_domain();

        assert_eq!(template.items.len(), 1);
        assert_eq!(template.items[0].category(), Some(MenuCategory::Proteinas));
    }

    #[test]
    fn should_read_no_items_when_json_is_malformed() {
        let template = entity(json!({ "unexpected": true })).into_domain();

        assert!(template.items.is_empty());
        assert_eq!(template.template_name, "Viernes");
    }

    #[test]
    fn should_write_items_readable_back() {
        let item = MenuTemplateItem {
            product_id: Uuid::new_v4(),
            category_external_id: Some(MenuCategory::Bebidas.external_id()),
            category_name: Some("Bebidas".to_string()),
            product_name_snapshot: Some("Limonada".to_string()),
        };

        let template = entity(items_to_json(&[item.clone()]).unwrap()).into_domain();

        assert_eq!(template.items, vec![item]);
    }
}
